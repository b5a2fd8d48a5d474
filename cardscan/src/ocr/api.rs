use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::OcrConfig;
use crate::error::{CardscanError, Result};

use super::provider::OcrResult;

/// Confidence reported when the Vision API omits one for the full-text
/// annotation, which it routinely does.
const DEFAULT_CONFIDENCE: f64 = 0.9;

#[derive(Clone, Debug)]
pub struct GoogleVisionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateItem>,
}

#[derive(Debug, Serialize)]
struct AnnotateItem {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    feature_type: String,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    responses: Vec<AnnotateResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateResult {
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    error: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    description: Option<String>,
    confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    message: Option<String>,
}

impl GoogleVisionClient {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| CardscanError::Ocr("API key required for Google Vision".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://vision.googleapis.com/v1".to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CardscanError::Ocr(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Run TEXT_DETECTION on one image. Fails when the API reports an error
    /// or returns no text annotations.
    pub async fn detect_text(&self, image_bytes: &[u8]) -> Result<OcrResult> {
        let request = AnnotateRequest {
            requests: vec![AnnotateItem {
                image: ImageContent {
                    content: STANDARD.encode(image_bytes),
                },
                features: vec![Feature {
                    feature_type: "TEXT_DETECTION".to_string(),
                    max_results: 1,
                }],
            }],
        };

        let response: AnnotateResponse = self.make_request(&request).await?;

        let result = response
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| CardscanError::Ocr("Empty response from Vision API".to_string()))?;

        if let Some(err) = result.error {
            return Err(CardscanError::Ocr(format!(
                "Vision API error: {}",
                err.message.unwrap_or_else(|| "unknown".to_string())
            )));
        }

        // The first annotation covers the whole image; the rest are
        // per-word boxes we don't need.
        let annotation = result
            .text_annotations
            .into_iter()
            .next()
            .ok_or_else(|| CardscanError::Ocr("No text detected in the image".to_string()))?;

        Ok(OcrResult {
            text: annotation.description.unwrap_or_default(),
            confidence: annotation.confidence.unwrap_or(DEFAULT_CONFIDENCE),
        })
    }

    async fn make_request(&self, request: &AnnotateRequest) -> Result<AnnotateResponse> {
        let mut retries = 0;
        let max_retries = 3;

        loop {
            let response = self
                .client
                .post(format!("{}/images:annotate", self.base_url))
                .query(&[("key", self.api_key.as_str())])
                .header("Content-Type", "application/json")
                .json(request)
                .send()
                .await;

            match response {
                Ok(resp) => {
                    if resp.status().is_success() {
                        return resp.json().await.map_err(|e| {
                            CardscanError::Ocr(format!("Failed to parse response: {e}"))
                        });
                    } else if resp.status().as_u16() == 429 || resp.status().is_server_error() {
                        retries += 1;
                        if retries >= max_retries {
                            return Err(CardscanError::Ocr(format!(
                                "API request failed after {} retries: {}",
                                max_retries,
                                resp.status()
                            )));
                        }
                        let delay = Duration::from_millis(100 * (2_u64.pow(retries)));
                        tokio::time::sleep(delay).await;
                        continue;
                    } else {
                        let status = resp.status();
                        let body = resp.text().await.unwrap_or_default();
                        return Err(CardscanError::Ocr(format!(
                            "API request failed: {status} - {body}"
                        )));
                    }
                }
                Err(e) => {
                    retries += 1;
                    if retries >= max_retries {
                        return Err(CardscanError::Ocr(format!(
                            "API request failed after {max_retries} retries: {e}"
                        )));
                    }
                    let delay = Duration::from_millis(100 * (2_u64.pow(retries)));
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
