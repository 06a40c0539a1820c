//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::EmployerStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide employer store.
    pub store: Arc<dyn EmployerStore>,
}

impl AppState {
    /// Wraps a store backend.
    #[must_use]
    pub fn new(store: Arc<dyn EmployerStore>) -> Self {
        Self { store }
    }
}
