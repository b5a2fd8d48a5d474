pub mod auth;
pub(crate) mod health;
pub mod scan;
pub mod sheets;

pub use health::health_check;
