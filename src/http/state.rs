//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::VenueRepository;
use crate::db::SearchConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance backing venue data
    pub repository: Arc<dyn VenueRepository>,
    /// Search settings (coarse fetch cap)
    pub search: SearchConfig,
}

impl AppState {
    /// Create a new application state with the given repository and
    /// default search settings.
    pub fn new(repository: Arc<dyn VenueRepository>) -> Self {
        Self {
            repository,
            search: SearchConfig::default(),
        }
    }

    pub fn with_search_config(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
