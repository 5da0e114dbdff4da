//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis, so the `load_fruits` command and
//! every server instance see the same `fruits` key.

mod cache;
mod error;

pub use cache::RedisCache;
