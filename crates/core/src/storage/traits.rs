use async_trait::async_trait;

use crate::fruit::{Fruit, NewFruit};

use super::Result;

/// Repository for fruit records.
#[async_trait]
pub trait FruitRepository: Send + Sync {
    /// Gets every fruit in store iteration order (ascending ID).
    async fn list_fruits(&self) -> Result<Vec<Fruit>>;

    /// Replaces the whole store with `fruits` and returns how many were created.
    ///
    /// The replace is atomic: readers see either the old contents or the new
    /// ones, and a failure leaves the old contents in place.
    async fn replace_all(&self, fruits: &[NewFruit]) -> Result<usize>;

    /// Counts the fruits in the store.
    async fn count_fruits(&self) -> Result<usize>;
}
