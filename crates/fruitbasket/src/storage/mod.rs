//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `fruitbasket_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-local storage, mostly useful for tests and demos
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p fruitbasket
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p fruitbasket --no-default-features --features inmemory,memory
//! ```

use std::sync::Arc;

use fruitbasket_core::storage::FruitRepository;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p fruitbasket --features sqlite"
);

pub mod cached;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

pub use cached::CachedFruitLister;

/// Opens the storage backend selected at compile time.
#[cfg(feature = "sqlite")]
pub async fn open(sqlite_path: &str) -> anyhow::Result<Arc<dyn FruitRepository>> {
    tracing::info!(path = %sqlite_path, "Opening SQLite fruit store");
    Ok(Arc::new(sqlite::SqliteRepository::new(sqlite_path).await?))
}

/// Opens the storage backend selected at compile time.
#[cfg(feature = "inmemory")]
pub async fn open(sqlite_path: &str) -> anyhow::Result<Arc<dyn FruitRepository>> {
    tracing::warn!(
        path = %sqlite_path,
        "In-memory fruit store selected; the SQLite path is ignored and data is not persisted"
    );
    Ok(Arc::new(inmemory::InMemoryRepository::new()))
}
