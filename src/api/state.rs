use std::sync::Arc;

use crate::core::AppConfig;
use crate::transcript::TranscriptStore;

pub struct AppState {
    pub store: Arc<TranscriptStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<TranscriptStore>, config: AppConfig) -> Self {
        Self { store, config }
    }
}
