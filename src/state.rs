//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::SearchService;
use crate::domain::repositories::SearchRepository;

/// Search service over whichever storage backend was selected at startup.
pub type DynSearchService = SearchService<dyn SearchRepository>;

#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<DynSearchService>,
    /// Number of searches shown on the home page.
    pub recent_limit: i64,
}

impl AppState {
    /// Creates the state from a repository and the home page listing size.
    pub fn new(repository: Arc<dyn SearchRepository>, recent_limit: i64) -> Self {
        Self {
            search_service: Arc::new(SearchService::new(repository)),
            recent_limit,
        }
    }
}
