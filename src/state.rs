//! Shared application state for all routes.

use crate::store::WordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Pooled store handle, reused by every request.
    pub store: Arc<dyn WordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        AppState { store }
    }
}
