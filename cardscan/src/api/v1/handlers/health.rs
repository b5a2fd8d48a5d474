use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub ocr: OcrStatus,
    pub auth: AuthStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct OcrStatus {
    pub status: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AuthStatus {
    /// Whether the token refresh endpoint is usable (OAuth client
    /// credentials configured).
    pub refresh: String,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let ocr = OcrStatus {
        status: if state.ocr.is_available() {
            "available".to_string()
        } else {
            "unavailable".to_string()
        },
        model: state.config.ocr.model.clone(),
    };

    let auth = AuthStatus {
        refresh: if state.tokens.is_available() {
            "available".to_string()
        } else {
            "unavailable".to_string()
        },
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ocr,
        auth,
    })
}
