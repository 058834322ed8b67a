//! Shared application state.

use std::sync::Arc;

use orderdesk_store::store::OrderStore;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory order store.
    pub store: Arc<OrderStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }
}
