use thiserror::Error;

/// Internal error type for the whole crate.
///
/// Never serialized directly: v1 handlers convert through
/// `api::v1::response::ApiResponse`, which owns the wire contract and keeps
/// internal detail out of responses.
#[derive(Error, Debug)]
pub enum CardscanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    ApiAuth(String),

    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("Spreadsheet error: {0}")]
    Sheets(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CardscanError>;
