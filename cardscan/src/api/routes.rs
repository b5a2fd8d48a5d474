use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::v1;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Multipart bodies carry some framing overhead beyond the image itself
    let body_limit = RequestBodyLimitLayer::new(state.config.upload.max_bytes + 64 * 1024);

    let v1 = v1::router::v1_router();

    Router::new()
        .nest("/api/v1", v1)
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
