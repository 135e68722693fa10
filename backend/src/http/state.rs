//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::GameRepository;
use crate::services::CatalogPolicy;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance, built once at start-up
    pub repository: Arc<dyn GameRepository>,
    /// Validation hook and search-miss policy
    pub policy: CatalogPolicy,
}

impl AppState {
    /// Create a new application state with the default (accept-all) policy.
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self {
            repository,
            policy: CatalogPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CatalogPolicy) -> Self {
        self.policy = policy;
        self
    }
}
