//! Auth request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::TokenSet;

/// Request body for `POST /v1/auth:refresh`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    /// The long-lived refresh credential issued at sign-in.
    pub refresh_token: String,
}

/// Response body for `POST /v1/auth:refresh`: a new immutable token.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    /// Seconds until the new token expires.
    pub expires_in: i64,
    /// Instant after which the token should be refreshed again.
    pub expires_at: DateTime<Utc>,
}

impl From<TokenSet> for RefreshTokenResponse {
    fn from(token: TokenSet) -> Self {
        Self {
            expires_at: token.expires_at(),
            access_token: token.access_token,
            expires_in: token.expires_in_secs,
        }
    }
}
