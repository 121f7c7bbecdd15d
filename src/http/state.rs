//! Application state for the HTTP server.

use crate::config::DashboardConfig;
use crate::observations::cache::ObservationCache;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loads the observation table once, then hands out the same copy.
    pub cache: Arc<ObservationCache>,
    /// Page title.
    pub title: String,
}

impl AppState {
    pub fn new(cache: Arc<ObservationCache>, title: impl Into<String>) -> Self {
        Self {
            cache,
            title: title.into(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            Arc::new(ObservationCache::new(config.data_path.clone())),
            config.title.clone(),
        )
    }
}
