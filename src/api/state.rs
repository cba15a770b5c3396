use std::sync::Arc;

use crate::{config::Config, live::SessionSettings, services::backend::MovieBackend};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn MovieBackend>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(backend: Arc<dyn MovieBackend>, config: Config) -> Self {
        Self {
            backend,
            config: Arc::new(config),
        }
    }

    /// Settings every live session of this server starts with
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            page_size: self.config.browse_page_size,
            recommendation_count: self.config.recommendation_count,
            search_debounce: self.config.search_debounce(),
        }
    }
}
