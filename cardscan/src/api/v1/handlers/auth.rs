//! v1 Auth handler: access token refresh.

use axum::extract::State;

use crate::api::v1::dto::{RefreshTokenRequest, RefreshTokenResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::error::CardscanError;

/// `POST /api/v1/auth:refresh`
///
/// Exchanges a refresh token for a new access token. A rejected refresh
/// token returns the distinct `refresh_failed` code so clients send the
/// user back through sign-in instead of retrying.
#[utoipa::path(
    post,
    path = "/api/v1/auth:refresh",
    tag = "auth",
    operation_id = "auth.refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New access token issued", body = RefreshTokenResponse),
        (status = 401, description = "Refresh token rejected", body = ApiError),
        (status = 503, description = "Refresh not configured on this server", body = ApiError),
    )
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<RefreshTokenRequest>,
) -> ApiResponse<RefreshTokenResponse> {
    if !state.tokens.is_available() {
        return ApiResponse::error(
            ErrorCode::ServiceUnavailable,
            "Token refresh is not configured on this server",
        );
    }

    match state.tokens.refresh(&req.refresh_token).await {
        Ok(token) => ApiResponse::success(token.into()),
        Err(e @ CardscanError::RefreshFailed(_)) => {
            tracing::warn!(error = %e, "Token refresh rejected");
            e.into()
        }
        Err(e) => e.into(),
    }
}
