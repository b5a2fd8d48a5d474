use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;
use super::middleware::session_token_middleware;

pub fn v1_router() -> Router<AppState> {
    let sheets = Router::new()
        .route(
            "/",
            get(handlers::sheets::list_sheets).post(handlers::sheets::create_sheet),
        )
        .route(
            "/{spreadsheetId}/rows",
            post(handlers::sheets::append_contact),
        );

    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        // auth:refresh carries its own credential in the body; requiring a
        // live access token here would defeat its purpose
        .route("/auth:refresh", post(handlers::auth::refresh_token))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    let protected_routes = Router::new()
        .route("/scan", post(handlers::scan::scan_card))
        .nest("/sheets", sheets)
        .route_layer(middleware::from_fn(session_token_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
