//! Cache backend implementations.
//!
//! This module provides concrete implementations of the cache trait
//! defined in `fruitbasket_core::cache`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-process LRU cache using tokio synchronization primitives
//! - `redis`: Redis cache using the redis crate
//!
//! These features are mutually exclusive - only one cache backend can be
//! enabled at a time.

use std::sync::Arc;

use fruitbasket_core::cache::Cache;

use crate::config::Config;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p fruitbasket --no-default-features --features sqlite,redis"
);

#[cfg(any(feature = "memory", test))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

/// Connects the cache backend selected at compile time.
#[cfg(feature = "memory")]
pub async fn connect(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
    Ok(Arc::new(memory::MemoryCache::new(config.cache_max_entries)?))
}

/// Connects the cache backend selected at compile time.
#[cfg(feature = "redis")]
pub async fn connect(config: &Config) -> anyhow::Result<Arc<dyn Cache>> {
    tracing::info!(url = %config.redis_url, "Connecting to Redis cache");
    Ok(Arc::new(redis_impl::RedisCache::new(&config.redis_url).await?))
}
