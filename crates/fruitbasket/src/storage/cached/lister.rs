//! Cached fruit lister.

use std::sync::Arc;
use std::time::Duration;

use fruitbasket_core::cache::{
    deserialize_names, serialize_names, Cache, CachePresence, FRUITS_KEY,
};
use fruitbasket_core::listing::FruitListing;
use fruitbasket_core::storage::{FruitRepository, Result};

/// Serves the list of fruit names, reading through the cache.
///
/// There is no coordination between concurrent misses: two requests may
/// both read the store and both write the same snapshot to the cache.
#[derive(Clone)]
pub struct CachedFruitLister {
    repository: Arc<dyn FruitRepository>,
    cache: Arc<dyn Cache>,
    presence: CachePresence,
    ttl: Option<Duration>,
}

impl CachedFruitLister {
    /// Creates a new cached fruit lister.
    ///
    /// # Arguments
    ///
    /// * `repository` - The fruit store
    /// * `cache` - The cache holding the `fruits` snapshot
    /// * `presence` - What counts as a cache hit
    /// * `ttl` - Expiry for the snapshot; `None` keeps it until evicted
    pub fn new(
        repository: Arc<dyn FruitRepository>,
        cache: Arc<dyn Cache>,
        presence: CachePresence,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            repository,
            cache,
            presence,
            ttl,
        }
    }

    /// Returns the fruit names, labelled with where they came from.
    ///
    /// Cache failures are logged and treated as misses. Only a failure to
    /// read the store is returned as an error.
    pub async fn list(&self) -> Result<FruitListing> {
        if let Some(names) = self.cached_names().await {
            if self.presence.is_hit(&names) {
                tracing::debug!(count = names.len(), "Cache hit for fruits");
                return Ok(FruitListing::from_cache(names));
            }
            tracing::debug!(presence = %self.presence, "Cached fruits not counted as a hit");
        }

        tracing::debug!("Cache miss for fruits");
        let names: Vec<String> = self
            .repository
            .list_fruits()
            .await?
            .into_iter()
            .map(|fruit| fruit.name)
            .collect();

        match serialize_names(&names) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(FRUITS_KEY, &bytes, self.ttl).await {
                    tracing::warn!(error = %err, "Failed to cache fruits");
                }
            }
            Err(err) => tracing::warn!(error = %err, "Failed to serialize fruits for cache"),
        }

        Ok(FruitListing::from_store(names))
    }

    async fn cached_names(&self) -> Option<Vec<String>> {
        match self.cache.get(FRUITS_KEY).await {
            Ok(Some(bytes)) => match deserialize_names(&bytes) {
                Ok(names) => Some(names),
                Err(err) => {
                    // Undecodable snapshot - treat as a miss; the next write overwrites it
                    tracing::warn!(error = %err, "Cached fruits deserialization failed");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read fruits from cache");
                None
            }
        }
    }
}
