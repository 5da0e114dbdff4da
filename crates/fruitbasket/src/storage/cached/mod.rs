//! Cache-aside read path for the fruit listing.
//!
//! - **Reads**: Check the `fruits` key first, on miss read the store and
//!   populate the key
//! - **Writes**: none; replacing the store does not touch the cache unless
//!   the import runs with `InvalidationPolicy::OnImport`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("fruitbasket.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000)?);
//!
//! let lister = CachedFruitLister::new(repo, cache, CachePresence::KeyExists, None);
//! let listing = lister.list().await?;
//! ```

mod lister;

pub use lister::CachedFruitLister;
