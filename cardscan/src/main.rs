use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardscan::api::{create_router, AppState};
use cardscan::auth::TokenClient;
use cardscan::config::Config;
use cardscan::ocr::OcrProvider;
use cardscan::sheets::SheetsClient;

#[derive(Parser)]
#[command(name = "cardscan")]
#[command(about = "Business card scanner: OCR a card photo, extract contact fields, save to Google Sheets")]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardscan=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Initializing OCR provider: {}...", config.ocr.model);
    let ocr = OcrProvider::new(&config.ocr)?;
    if !ocr.is_available() {
        tracing::warn!("OCR unavailable - card scans will fail until it is configured");
    }

    let sheets = SheetsClient::new(&config.sheets)?;

    let tokens = TokenClient::new(config.auth.as_ref());
    if !tokens.is_available() {
        tracing::warn!(
            "GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET not set - token refresh is disabled"
        );
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, ocr, sheets, tokens);
    let app = create_router(state);

    tracing::info!("Cardscan starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
