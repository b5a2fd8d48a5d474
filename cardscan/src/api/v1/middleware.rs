//! # Bearer Token Middleware
//!
//! Protects all v1 routes except the explicitly public ones. The bearer
//! token is the caller's Google access token; the middleware does not (and
//! cannot) validate it against Google. It only enforces presence and shape,
//! then stashes it in request extensions for handlers that call the Google
//! APIs on the caller's behalf. A stale token surfaces later as a 401 from
//! the sheets client.

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::response::{ApiResponse, ErrorCode};

/// The caller's Google access token, extracted from the Authorization
/// header and passed to handlers via request extensions.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Axum middleware that requires `Authorization: Bearer <token>` on every
/// protected v1 route.
pub async fn session_token_middleware(mut request: Request<Body>, next: Next) -> Response {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => h[7..].trim().to_string(),
        Some(_) => {
            return ApiResponse::<()>::error(
                ErrorCode::Unauthorized,
                "Invalid authorization header format. Expected: Bearer <token>",
            )
            .into_response();
        }
        None => {
            return ApiResponse::<()>::error(
                ErrorCode::Unauthorized,
                "Missing authorization header",
            )
            .into_response();
        }
    };

    if token.is_empty() {
        return ApiResponse::<()>::error(ErrorCode::Unauthorized, "Empty bearer token")
            .into_response();
    }

    request.extensions_mut().insert(SessionToken(token));
    next.run(request).await
}
