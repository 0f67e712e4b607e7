//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::EntryService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Entry service for all business logic.
    pub entry_service: Arc<EntryService>,
}

impl AppState {
    /// Wraps the service for sharing across handlers.
    #[must_use]
    pub fn new(entry_service: EntryService) -> Self {
        Self {
            entry_service: Arc::new(entry_service),
        }
    }
}
