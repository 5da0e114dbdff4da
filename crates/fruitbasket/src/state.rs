//! Application state shared by all request handlers.

use std::sync::Arc;

use fruitbasket_core::cache::Cache;
use fruitbasket_core::storage::FruitRepository;

use crate::{config::Config, storage::CachedFruitLister};

/// Shared application state.
///
/// This is cloned for each request handler; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Fruit store, used directly by the readiness probe.
    pub repository: Arc<dyn FruitRepository>,
    /// Cache-aside reader behind `GET /`.
    pub lister: CachedFruitLister,
}

impl AppState {
    /// Creates a new AppState from the opened store and cache backends.
    pub fn new(
        repository: Arc<dyn FruitRepository>,
        cache: Arc<dyn Cache>,
        config: &Config,
    ) -> Self {
        tracing::debug!(
            presence = %config.cache_presence,
            ttl_seconds = ?config.cache_ttl_seconds,
            "Configuring fruit listing cache"
        );

        let lister = CachedFruitLister::new(
            repository.clone(),
            cache,
            config.cache_presence,
            config.cache_ttl(),
        );

        Self { repository, lister }
    }
}
