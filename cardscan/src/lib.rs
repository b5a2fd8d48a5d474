//! Cardscan: a self-hostable business card scanner service.
//!
//! An authenticated caller uploads a card photo; the service runs OCR on it
//! (local Tesseract or Google Cloud Vision), heuristically parses the
//! recognized text into contact fields, and appends confirmed contacts as
//! rows to a Google Sheet chosen or created by the caller.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod sheets;
