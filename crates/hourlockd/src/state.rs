//! Application state and shared resources.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::registry::AuthRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Identity registry (in-memory, lives for the process lifetime)
    pub registry: Arc<AuthRegistry>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let registry = Arc::new(AuthRegistry::new(config.key_length));
        Self { config, registry }
    }
}
