use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only product catalog, loaded at startup
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates application state around a loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
