use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::AuthConfig;
use crate::error::{CardscanError, Result};

/// A freshly minted access token. Immutable: refreshing produces a new
/// value instead of updating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    pub access_token: String,
    pub expires_in_secs: i64,
    pub refreshed_at: DateTime<Utc>,
}

impl TokenSet {
    /// Instant after which the access token should be refreshed again.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.refreshed_at + ChronoDuration::seconds(self.expires_in_secs)
    }
}

enum TokenBackend {
    Configured {
        client: Client,
        auth: AuthConfig,
    },
    Unavailable {
        reason: String,
    },
}

pub struct TokenClient {
    backend: TokenBackend,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

impl TokenClient {
    pub fn new(auth: Option<&AuthConfig>) -> Self {
        let backend = match auth {
            Some(auth) => match Client::builder().timeout(Duration::from_secs(15)).build() {
                Ok(client) => TokenBackend::Configured {
                    client,
                    auth: auth.clone(),
                },
                Err(e) => TokenBackend::Unavailable {
                    reason: format!("Failed to create HTTP client: {e}"),
                },
            },
            None => TokenBackend::Unavailable {
                reason: "GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET not configured".to_string(),
            },
        };

        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, TokenBackend::Unavailable { .. })
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// Any rejection by the identity provider comes back as
    /// [`CardscanError::RefreshFailed`], the signal for clients to run the
    /// sign-in flow again.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenSet> {
        let (client, auth) = match &self.backend {
            TokenBackend::Configured { client, auth } => (client, auth),
            TokenBackend::Unavailable { reason } => {
                return Err(CardscanError::Internal(format!(
                    "Token refresh unavailable: {reason}"
                )));
            }
        };

        if refresh_token.trim().is_empty() {
            return Err(CardscanError::RefreshFailed(
                "Missing refresh token".to_string(),
            ));
        }

        let params = [
            ("client_id", auth.client_id.as_str()),
            ("client_secret", auth.client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];

        let response = client.post(&auth.token_url).form(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<TokenErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.error_description.or(e.error))
                .unwrap_or_else(|| status.to_string());
            return Err(CardscanError::RefreshFailed(detail));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            CardscanError::RefreshFailed(format!("Malformed token response: {e}"))
        })?;

        Ok(TokenSet {
            access_token: token.access_token,
            expires_in_secs: token.expires_in,
            refreshed_at: Utc::now(),
        })
    }
}
