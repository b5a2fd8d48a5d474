use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub sheets: SheetsConfig,
    pub auth: Option<AuthConfig>,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub languages: String,
    pub timeout_secs: u64,
    pub max_image_dimension: u32,
    pub min_image_dimension: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    pub sheets_base_url: String,
    pub drive_base_url: String,
    pub timeout_secs: u64,
}

/// OAuth client credentials for refreshing Google access tokens.
///
/// Optional as a pair: when either half is missing the refresh endpoint is
/// reported unavailable at startup instead of failing per request.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("CARDSCAN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("CARDSCAN_PORT", 3000),
            },
            ocr: OcrConfig {
                model: env::var("OCR_MODEL").unwrap_or_else(|_| "local/tesseract".to_string()),
                api_key: env::var("OCR_API_KEY").ok(),
                base_url: env::var("OCR_BASE_URL").ok(),
                languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng".to_string()),
                timeout_secs: parse_env_or("OCR_TIMEOUT", 60),
                max_image_dimension: parse_env_or("OCR_MAX_DIMENSION", 4096),
                min_image_dimension: parse_env_or("OCR_MIN_DIMENSION", 50),
            },
            sheets: SheetsConfig {
                sheets_base_url: env::var("SHEETS_BASE_URL")
                    .unwrap_or_else(|_| "https://sheets.googleapis.com/v4".to_string()),
                drive_base_url: env::var("DRIVE_BASE_URL")
                    .unwrap_or_else(|_| "https://www.googleapis.com/drive/v3".to_string()),
                timeout_secs: parse_env_or("SHEETS_TIMEOUT", 30),
            },
            auth: match (env::var("GOOGLE_CLIENT_ID"), env::var("GOOGLE_CLIENT_SECRET")) {
                (Ok(client_id), Ok(client_secret)) => Some(AuthConfig {
                    client_id,
                    client_secret,
                    token_url: env::var("GOOGLE_TOKEN_URL")
                        .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
                }),
                _ => None,
            },
            upload: UploadConfig {
                max_bytes: parse_env_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn server_defaults() {
        std::env::remove_var("CARDSCAN_HOST");
        std::env::remove_var("CARDSCAN_PORT");
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    #[serial]
    fn ocr_defaults() {
        std::env::remove_var("OCR_MODEL");
        std::env::remove_var("OCR_TIMEOUT");
        let config = Config::default();
        assert_eq!(config.ocr.model, "local/tesseract");
        assert_eq!(config.ocr.timeout_secs, 60);
        assert_eq!(config.ocr.max_image_dimension, 4096);
        assert_eq!(config.ocr.min_image_dimension, 50);
    }

    #[test]
    #[serial]
    fn auth_requires_both_credentials() {
        std::env::remove_var("GOOGLE_CLIENT_ID");
        std::env::remove_var("GOOGLE_CLIENT_SECRET");
        let config = Config::default();
        assert!(config.auth.is_none());

        std::env::set_var("GOOGLE_CLIENT_ID", "id-only");
        let config = Config::default();
        assert!(config.auth.is_none());

        std::env::set_var("GOOGLE_CLIENT_SECRET", "secret");
        let config = Config::default();
        let auth = config.auth.unwrap();
        assert_eq!(auth.client_id, "id-only");
        assert_eq!(auth.token_url, "https://oauth2.googleapis.com/token");

        std::env::remove_var("GOOGLE_CLIENT_ID");
        std::env::remove_var("GOOGLE_CLIENT_SECRET");
    }

    #[test]
    #[serial]
    fn upload_limit_from_env() {
        std::env::set_var("MAX_UPLOAD_BYTES", "1048576");
        let config = Config::default();
        assert_eq!(config.upload.max_bytes, 1048576);
        std::env::remove_var("MAX_UPLOAD_BYTES");

        let config = Config::default();
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
    }

    #[test]
    #[serial]
    fn invalid_port_falls_back_to_default() {
        std::env::set_var("CARDSCAN_PORT", "not-a-port");
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        std::env::remove_var("CARDSCAN_PORT");
    }
}
