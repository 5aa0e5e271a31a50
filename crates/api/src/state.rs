//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::config::ApiConfig;
use crate::db::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The entity store sits behind
/// a single mutex: every store operation, id allocation included, runs with
/// exclusive access.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Mutex<Store>,
}

impl AppState {
    /// Create application state, seeding the store if the config asks for it.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let store = if config.seed_sample_data {
            Store::new()
        } else {
            Store::empty()
        };
        Self::with_store(config, store)
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn with_store(config: ApiConfig, store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Mutex::new(store),
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Lock the entity store.
    ///
    /// Keep the guard for the duration of one store operation only.
    pub async fn store(&self) -> MutexGuard<'_, Store> {
        self.inner.store.lock().await
    }

    /// Whether strict field validation is enabled.
    #[must_use]
    pub fn strict_validation(&self) -> bool {
        self.inner.config.strict_validation
    }
}
