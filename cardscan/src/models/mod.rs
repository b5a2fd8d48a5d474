pub mod contact;
pub mod sheet;

pub use contact::{ContactData, ExtractedContact};
pub use sheet::SpreadsheetInfo;
