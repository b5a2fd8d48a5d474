//! Scan request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::ExtractedContact;
use crate::ocr::OcrResult;

/// Response body for `POST /v1/scan`.
///
/// The parsed contact fields (empty string when a field was not found in
/// the recognized text), the full OCR transcript for display and manual
/// correction, and the OCR engine's confidence.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// The raw recognized text, exactly as returned by the OCR engine.
    pub raw_text: String,
    /// OCR confidence in `0.0..=1.0`.
    pub confidence: f64,
}

impl ScanResponse {
    pub fn new(contact: ExtractedContact, ocr: OcrResult) -> Self {
        Self {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            website: contact.website,
            raw_text: ocr.text,
            confidence: ocr.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_response_serializes_camel_case() {
        let resp = ScanResponse {
            name: "Jane".into(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            raw_text: "Jane\n".into(),
            confidence: 0.9,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["rawText"], "Jane\n");
        assert_eq!(json["confidence"], 0.9);
    }
}
