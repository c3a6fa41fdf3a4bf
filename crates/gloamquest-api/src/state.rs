//! Shared application state.

use std::sync::Arc;

use gloamquest_core::generator::Generator;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The upstream generation API, injected at startup.
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }
}
