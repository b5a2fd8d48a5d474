use std::sync::Arc;
use std::time::Duration;

use leptess::LepTess;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::{CardscanError, Result};

use super::api::GoogleVisionClient;

/// Recognized text for one image plus the engine's confidence estimate
/// in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrResult {
    pub text: String,
    pub confidence: f64,
}

enum OcrBackend {
    Local { tesseract: Arc<Mutex<LepTess>> },
    Api { client: GoogleVisionClient },
    Unavailable { reason: String },
}

pub struct OcrProvider {
    backend: OcrBackend,
    config: OcrConfig,
}

fn create_tesseract(languages: &str) -> std::result::Result<LepTess, String> {
    LepTess::new(None, languages).map_err(|e| e.to_string())
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let model_lower = config.model.to_lowercase();
        let provider_prefix = model_lower.split('/').next().unwrap_or("local");

        let backend = match provider_prefix {
            "google" => match GoogleVisionClient::new(config) {
                Ok(client) => {
                    info!("Google Vision OCR backend initialized");
                    OcrBackend::Api { client }
                }
                Err(e) => {
                    let reason = format!("Google Vision OCR backend unavailable: {e}");
                    warn!("{}", reason);
                    OcrBackend::Unavailable { reason }
                }
            },
            _ => match create_tesseract(&config.languages) {
                Ok(lt) => {
                    info!(languages = %config.languages, "Tesseract OCR initialized");
                    OcrBackend::Local {
                        tesseract: Arc::new(Mutex::new(lt)),
                    }
                }
                Err(e) => {
                    let reason = format!("Tesseract not available: {e}");
                    warn!("{}", reason);
                    OcrBackend::Unavailable { reason }
                }
            },
        };

        Ok(Self {
            backend,
            config: config.clone(),
        })
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }

    /// Recognize text in one image, bounded by the configured timeout.
    ///
    /// Fails with [`CardscanError::Ocr`] when nothing is recognized, so
    /// callers never hand an empty transcript to the extractor thinking it
    /// was a good scan.
    pub async fn detect_text(&self, image_bytes: &[u8]) -> Result<OcrResult> {
        let timeout_duration = Duration::from_secs(self.config.timeout_secs);

        let result =
            tokio::time::timeout(timeout_duration, self.detect_text_internal(image_bytes)).await;

        match result {
            Ok(inner_result) => inner_result,
            Err(_) => Err(CardscanError::Ocr(format!(
                "OCR operation timed out after {} seconds",
                self.config.timeout_secs
            ))),
        }
    }

    async fn detect_text_internal(&self, image_bytes: &[u8]) -> Result<OcrResult> {
        let result = match &self.backend {
            OcrBackend::Local { tesseract } => {
                let bytes = image_bytes.to_vec();
                let tesseract = Arc::clone(tesseract);

                tokio::task::spawn_blocking(move || {
                    let mut lt = tesseract.blocking_lock();
                    lt.set_image_from_mem(&bytes)
                        .map_err(|e| CardscanError::Ocr(format!("Failed to set image: {e}")))?;
                    let text = lt
                        .get_utf8_text()
                        .map_err(|e| CardscanError::Ocr(format!("Failed to extract text: {e}")))?;
                    let confidence = f64::from(lt.mean_text_conf()) / 100.0;
                    Ok::<_, CardscanError>(OcrResult {
                        text: text.trim().to_string(),
                        confidence: confidence.clamp(0.0, 1.0),
                    })
                })
                .await
                .map_err(|e| CardscanError::Ocr(format!("OCR task panicked: {e}")))??
            }
            OcrBackend::Api { client } => client.detect_text(image_bytes).await?,
            OcrBackend::Unavailable { reason } => {
                return Err(CardscanError::OcrUnavailable(reason.clone()))
            }
        };

        if result.text.trim().is_empty() {
            return Err(CardscanError::Ocr(
                "No text detected in the image".to_string(),
            ));
        }

        Ok(result)
    }
}

impl Clone for OcrProvider {
    fn clone(&self) -> Self {
        match &self.backend {
            OcrBackend::Local { tesseract } => Self {
                backend: OcrBackend::Local {
                    tesseract: Arc::clone(tesseract),
                },
                config: self.config.clone(),
            },
            OcrBackend::Api { client } => Self {
                backend: OcrBackend::Api {
                    client: client.clone(),
                },
                config: self.config.clone(),
            },
            OcrBackend::Unavailable { reason } => Self {
                backend: OcrBackend::Unavailable {
                    reason: reason.clone(),
                },
                config: self.config.clone(),
            },
        }
    }
}
