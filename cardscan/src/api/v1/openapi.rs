use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::models;

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cardscan API",
        version = "1.0.0",
        description = "Business card scanner. Upload a card photo, get parsed contact fields, append them to a Google Sheet.",
    ),
    paths(
        handlers::health::health_check,
        handlers::scan::scan_card,
        handlers::sheets::list_sheets,
        handlers::sheets::create_sheet,
        handlers::sheets::append_contact,
        handlers::auth::refresh_token,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Domain
        models::contact::ExtractedContact,
        models::sheet::SpreadsheetInfo,
        // Scan
        dto::scan::ScanResponse,
        // Sheets
        dto::sheets::ListSheetsResponse,
        dto::sheets::CreateSheetRequest,
        dto::sheets::CreateSheetResponse,
        dto::sheets::AppendContactRequest,
        dto::sheets::AppendContactResponse,
        // Auth
        dto::auth::RefreshTokenRequest,
        dto::auth::RefreshTokenResponse,
        // Health
        handlers::health::HealthData,
        handlers::health::OcrStatus,
        handlers::health::AuthStatus,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "scan", description = "Card scanning and contact extraction"),
        (name = "sheets", description = "Spreadsheet listing, creation, and appends"),
        (name = "auth", description = "Access token refresh"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

/// `GET /api/v1/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Redoc UI mounted at `/api/v1/docs`.
pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
