//! Application State
//!
//! Holds the search service and the configuration it was built from.

use std::sync::Arc;

use groundsearch_core::{ModelClient, SearchService, SessionStore};
use groundsearch_types::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub service: SearchService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        model: Arc<dyn ModelClient>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let service = SearchService::from_config(model, sessions, &config);
        Self { inner: Arc::new(AppStateInner { service, config }) }
    }

    pub fn service(&self) -> &SearchService {
        &self.inner.service
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn session_count(&self) -> usize {
        self.inner.service.sessions().len()
    }
}
