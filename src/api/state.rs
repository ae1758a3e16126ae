//! API server state

use std::sync::Arc;

use crate::catalog::Catalog;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Catalog manager
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
