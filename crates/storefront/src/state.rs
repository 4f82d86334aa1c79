//! Application state shared across the storefront.
//!
//! The explicit context object behind every page: configuration, the
//! storage backend and the catalog, initialized once from persisted
//! storage at startup. Services are constructed per-use against it rather
//! than living as module-level mutable state.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::services::auth::AuthService;
use crate::services::cart::CartStore;
use crate::services::orders::OrderArchive;
use crate::services::wishlist::Wishlist;
use crate::storage::{JsonFileStore, StorageBackend};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    storage: Box<dyn StorageBackend>,
    catalog: Catalog,
}

impl AppState {
    /// Create application state, opening the store file named by the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn new(config: Config) -> Result<Self> {
        let storage = JsonFileStore::open(&config.storage_path)?;
        Ok(Self::with_storage(config, storage))
    }

    /// Create application state over an explicit backend (tests, tools).
    #[must_use]
    pub fn with_storage(config: Config, storage: impl StorageBackend + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage: Box::new(storage),
                catalog: Catalog::hearhut(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn storage(&self) -> &dyn StorageBackend {
        self.inner.storage.as_ref()
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Identity service over this state's backend.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.storage())
    }

    /// Cart store over this state's backend.
    #[must_use]
    pub fn cart(&self) -> CartStore<'_> {
        CartStore::new(self.storage())
    }

    /// Order archive over this state's backend.
    #[must_use]
    pub fn orders(&self) -> OrderArchive<'_> {
        OrderArchive::new(self.storage())
    }

    /// Wishlist over this state's backend.
    #[must_use]
    pub fn wishlist(&self) -> Wishlist<'_> {
        Wishlist::new(self.storage())
    }
}
