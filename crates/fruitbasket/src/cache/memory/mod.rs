//! In-memory cache backend implementation.
//!
//! Provides a thread-safe LRU cache with TTL support for single-instance
//! deployments. Note that the `load_fruits` command runs in its own process,
//! so it cannot see or invalidate this cache.

mod cache;

pub use cache::MemoryCache;
