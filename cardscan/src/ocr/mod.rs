//! OCR (Optical Character Recognition) Module
//!
//! Converts a card photo into raw text plus a confidence estimate. Two
//! backends are supported, selected by `OCR_MODEL`:
//!
//! - `local/tesseract` (default): on-box OCR via leptess
//! - `google/vision`: the Cloud Vision `images:annotate` TEXT_DETECTION API
//!
//! When the configured backend cannot be constructed (missing binary
//! support, missing API key) the provider degrades to an `Unavailable`
//! state: the server still starts and scan requests fail with 503.

mod api;
mod preprocessing;
mod provider;

pub use preprocessing::preprocess_image;
pub use provider::{OcrProvider, OcrResult};
