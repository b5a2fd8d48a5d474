//! v1 Scan handler.
//!
//! Accepts a multipart card photo, runs OCR, and returns the parsed contact
//! fields plus the raw transcript. Nothing is persisted here; the caller
//! reviews the fields and appends them to a sheet explicitly.

use axum::extract::{Multipart, State};

use crate::api::v1::dto::ScanResponse;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::extract::extract_contact;
use crate::ocr::preprocess_image;

/// `POST /api/v1/scan`
///
/// Multipart form with a required `image` field. The file must be an image
/// and at most the configured upload limit (10 MiB by default).
#[utoipa::path(
    post,
    path = "/api/v1/scan",
    tag = "scan",
    operation_id = "scan.create",
    request_body(content_type = "multipart/form-data", content = String, description = "Card photo upload in an `image` field"),
    responses(
        (status = 200, description = "Recognized and parsed contact fields", body = ScanResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 503, description = "OCR backend unavailable", body = ApiError),
    )
)]
pub async fn scan_card(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResponse<ScanResponse> {
    let mut image_bytes: Option<Vec<u8>> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            let bytes = match field.bytes().await {
                Ok(b) => b,
                Err(e) => {
                    return ApiResponse::error(
                        ErrorCode::InvalidRequest,
                        format!("Failed to read file: {e}"),
                    );
                }
            };

            if bytes.len() > state.config.upload.max_bytes {
                return ApiResponse::error(
                    ErrorCode::InvalidRequest,
                    format!(
                        "Image too large: {} bytes (max {} bytes)",
                        bytes.len(),
                        state.config.upload.max_bytes
                    ),
                );
            }

            image_bytes = Some(bytes.to_vec());
        }
    }

    let bytes = match image_bytes {
        Some(b) => b,
        None => {
            return ApiResponse::error(ErrorCode::InvalidRequest, "No image file provided");
        }
    };

    // Sniff the actual content rather than trusting the declared type
    if infer::get(&bytes).map(|k| k.matcher_type()) != Some(infer::MatcherType::Image) {
        return ApiResponse::error(ErrorCode::InvalidRequest, "File must be an image");
    }

    let prepared = match preprocess_image(&bytes, &state.config.ocr) {
        Ok(p) => p,
        Err(e) => return e.into(),
    };

    let ocr_result = match state.ocr.detect_text(&prepared).await {
        Ok(r) => r,
        Err(e) => return e.into(),
    };

    let contact = extract_contact(&ocr_result.text);
    tracing::info!(
        confidence = ocr_result.confidence,
        has_name = !contact.name.is_empty(),
        has_email = !contact.email.is_empty(),
        "Card scanned"
    );

    ApiResponse::success(ScanResponse::new(contact, ocr_result))
}
