//! Shared application state threaded through the host router.

use std::sync::Arc;

use plughub_core::config::AppConfig;
use plughub_registry::registry::ServiceRegistry;

/// State available to every host handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The service registry holding all plugin lifecycle units.
    pub registry: Arc<ServiceRegistry>,
}

impl AppState {
    /// Creates the state.
    pub fn new(config: Arc<AppConfig>, registry: Arc<ServiceRegistry>) -> Self {
        Self { config, registry }
    }
}
