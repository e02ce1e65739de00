//! Shared application state.

use std::sync::Arc;

use crate::registry::TenantRegistry;

/// State handed to every handler: the immutable tenant registry.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TenantRegistry>,
}

impl AppState {
    pub fn new(registry: TenantRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
