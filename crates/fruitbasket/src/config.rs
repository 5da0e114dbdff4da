use std::{env, time::Duration};

use fruitbasket_core::cache::{CachePresence, InvalidationPolicy};

/// Cache configuration loaded from environment variables.
///
/// Listener address and SQLite path come from CLI flags (see `main.rs`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: unset, the snapshot never expires)
    pub cache_ttl_seconds: Option<u64>,
    /// Maximum number of in-memory cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// What counts as a cache hit (default: key-exists)
    pub cache_presence: CachePresence,
    /// Whether `load_fruits` clears the cached snapshot (default: manual)
    pub cache_invalidation: InvalidationPolicy,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: none; `0` also means none)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 10,000)
    /// - `CACHE_PRESENCE` - `key-exists` or `non-empty` (default: key-exists)
    /// - `CACHE_INVALIDATION` - `manual` or `on-import` (default: manual)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10_000),
            cache_presence: env::var("CACHE_PRESENCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            cache_invalidation: env::var("CACHE_INVALIDATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration, if one is configured.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: None,
            cache_max_entries: 10_000,
            cache_presence: CachePresence::default(),
            cache_invalidation: InvalidationPolicy::default(),
            redis_url: "redis://localhost:6379".to_string(),
        }
    }
}
