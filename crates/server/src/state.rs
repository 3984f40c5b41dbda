//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::JsonStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds only configuration and the store
/// handle; no request state survives between calls except through the
/// collection files.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: JsonStore,
}

impl AppState {
    /// Create a new application state with a store rooted at the configured
    /// data directory.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let store = JsonStore::new(&config.data_dir);
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the JSON file store.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }
}
