//! v1 Spreadsheet handlers.
//!
//! List, create, and append. All three call the Google APIs with the
//! caller's bearer token from [`SessionToken`]; a stale token comes back as
//! a 401 envelope so the client can refresh and retry. Single attempt per
//! request, no automatic retry.

use axum::extract::{Path, State};
use axum::Extension;

use crate::api::v1::dto::{
    AppendContactRequest, AppendContactResponse, CreateSheetRequest, CreateSheetResponse,
    ListSheetsResponse,
};
use crate::api::v1::middleware::SessionToken;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `GET /api/v1/sheets`
#[utoipa::path(
    get,
    path = "/api/v1/sheets",
    tag = "sheets",
    operation_id = "sheets.list",
    responses(
        (status = 200, description = "The caller's spreadsheets, most recently modified first", body = ListSheetsResponse),
        (status = 401, description = "Missing or rejected access token", body = ApiError),
    )
)]
pub async fn list_sheets(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> ApiResponse<ListSheetsResponse> {
    match state.sheets.list_spreadsheets(token.as_str()).await {
        Ok(spreadsheets) => ApiResponse::success(ListSheetsResponse { spreadsheets }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/sheets`
#[utoipa::path(
    post,
    path = "/api/v1/sheets",
    tag = "sheets",
    operation_id = "sheets.create",
    request_body = CreateSheetRequest,
    responses(
        (status = 201, description = "Spreadsheet created with the contacts header row", body = CreateSheetResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Missing or rejected access token", body = ApiError),
    )
)]
pub async fn create_sheet(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
    axum::Json(req): axum::Json<CreateSheetRequest>,
) -> ApiResponse<CreateSheetResponse> {
    let title = req.title.trim();
    if title.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Sheet title is required");
    }

    match state.sheets.create_spreadsheet(token.as_str(), title).await {
        Ok(spreadsheet) => ApiResponse::created(CreateSheetResponse { spreadsheet }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/sheets/{spreadsheetId}/rows`
#[utoipa::path(
    post,
    path = "/api/v1/sheets/{spreadsheetId}/rows",
    tag = "sheets",
    operation_id = "sheets.append",
    params(
        ("spreadsheetId" = String, Path, description = "Target spreadsheet ID"),
    ),
    request_body = AppendContactRequest,
    responses(
        (status = 200, description = "Contact row appended", body = AppendContactResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Missing or rejected access token", body = ApiError),
    )
)]
pub async fn append_contact(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
    Path(spreadsheet_id): Path<String>,
    axum::Json(req): axum::Json<AppendContactRequest>,
) -> ApiResponse<AppendContactResponse> {
    if spreadsheet_id.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Spreadsheet ID is required");
    }

    // scanned_at is stamped here, at the point of persistence
    let data = req.into_contact_data();

    match state
        .sheets
        .append_row(token.as_str(), &spreadsheet_id, &data)
        .await
    {
        Ok(()) => {
            tracing::info!(spreadsheet_id = %spreadsheet_id, "Contact appended");
            ApiResponse::success(AppendContactResponse { saved: true })
        }
        Err(e) => e.into(),
    }
}
