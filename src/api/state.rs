//! Application state for Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::traits::ObjectStore;

/// Shared application state.
///
/// The storage handle is injected here rather than reached through any
/// global, so tests can swap backends freely.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage backend.
    pub storage: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: Arc<AppConfig>, storage: Arc<dyn ObjectStore>) -> Self {
        Self { config, storage }
    }
}
