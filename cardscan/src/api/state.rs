use std::sync::Arc;

use crate::auth::TokenClient;
use crate::config::Config;
use crate::ocr::OcrProvider;
use crate::sheets::SheetsClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ocr: OcrProvider,
    pub sheets: SheetsClient,
    pub tokens: Arc<TokenClient>,
}

impl AppState {
    pub fn new(config: Config, ocr: OcrProvider, sheets: SheetsClient, tokens: TokenClient) -> Self {
        Self {
            config: Arc::new(config),
            ocr,
            sheets,
            tokens: Arc::new(tokens),
        }
    }
}
