pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::auth::TokenClient;
    use crate::config::{Config, OcrConfig, ServerConfig, SheetsConfig, UploadConfig};
    use crate::ocr::OcrProvider;
    use crate::sheets::SheetsClient;

    fn test_state() -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            ocr: OcrConfig {
                model: "google/vision".to_string(),
                api_key: Some("test-key".to_string()),
                base_url: None,
                languages: "eng".to_string(),
                timeout_secs: 60,
                max_image_dimension: 4096,
                min_image_dimension: 50,
            },
            sheets: SheetsConfig {
                sheets_base_url: "http://127.0.0.1:1/v4".to_string(),
                drive_base_url: "http://127.0.0.1:1/v3".to_string(),
                timeout_secs: 5,
            },
            auth: None,
            upload: UploadConfig {
                max_bytes: 10 * 1024 * 1024,
            },
        };

        let ocr = OcrProvider::new(&config.ocr).unwrap();
        let sheets = SheetsClient::new(&config.sheets).unwrap();
        let tokens = TokenClient::new(config.auth.as_ref());

        AppState::new(config, ocr, sheets, tokens)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn scan_requires_auth() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/scan")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "unauthorized");
    }

    #[tokio::test]
    async fn sheets_routes_require_auth() {
        let app = create_router(test_state());

        for (method, uri) in [
            ("GET", "/api/v1/sheets"),
            ("POST", "/api/v1/sheets"),
            ("POST", "/api/v1/sheets/abc123/rows"),
        ] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .header("content-type", "application/json")
                        .body(Body::from("{}"))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::UNAUTHORIZED,
                "{method} {uri} should reject missing bearer token"
            );
        }
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_json_is_public_and_valid() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(
            version.starts_with("3"),
            "OpenAPI version should start with 3, got: {version}"
        );
    }

    #[tokio::test]
    async fn success_envelope_has_data_no_error() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.get("data").is_some(), "success should have 'data' key");
        assert!(
            json.get("error").is_none(),
            "success should NOT have 'error' key"
        );
    }

    #[tokio::test]
    async fn error_envelope_has_error_no_data() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/scan")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert!(
            json.get("error").is_some(),
            "error response should have 'error' key"
        );
        assert!(
            json.get("data").is_none(),
            "error response should NOT have 'data' key"
        );
        assert!(
            json["error"]["code"].is_string(),
            "error.code should be a string"
        );
        assert!(
            json["error"]["message"].is_string(),
            "error.message should be a string"
        );
    }

    #[tokio::test]
    async fn scan_without_image_field_is_invalid_request() {
        let app = create_router(test_state());

        let boundary = "cardscan-test-boundary";
        let body = format!(
            "--{boundary}\r\ncontent-disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/scan")
                    .header("authorization", "Bearer ya29.test-token")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn scan_rejects_non_image_payload() {
        let app = create_router(test_state());

        let boundary = "cardscan-test-boundary";
        let body = format!(
            "--{boundary}\r\ncontent-disposition: form-data; name=\"image\"; filename=\"card.txt\"\r\ncontent-type: text/plain\r\n\r\nnot an image\r\n--{boundary}--\r\n"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/scan")
                    .header("authorization", "Bearer ya29.test-token")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn create_sheet_requires_title() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/sheets")
                    .header("authorization", "Bearer ya29.test-token")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn refresh_without_credentials_is_service_unavailable() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth:refresh")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"refreshToken":"1//abc"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "service_unavailable");
    }
}
