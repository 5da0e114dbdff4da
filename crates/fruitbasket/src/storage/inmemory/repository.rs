//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use fruitbasket_core::fruit::{Fruit, NewFruit};
use fruitbasket_core::storage::{FruitRepository, Result};

#[derive(Debug, Default)]
struct Store {
    fruits: Vec<Fruit>,
    last_id: i64,
}

/// In-memory storage backend for testing.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FruitRepository for InMemoryRepository {
    async fn list_fruits(&self) -> Result<Vec<Fruit>> {
        let store = self.store.read().await;
        Ok(store.fruits.clone())
    }

    async fn replace_all(&self, fruits: &[NewFruit]) -> Result<usize> {
        let mut store = self.store.write().await;

        let first_id = store.last_id + 1;
        let replacement: Vec<Fruit> = fruits
            .iter()
            .zip(first_id..)
            .map(|(fruit, id)| Fruit::new(id, fruit.name.clone()))
            .collect();

        store.last_id += replacement.len() as i64;
        store.fruits = replacement;

        Ok(store.fruits.len())
    }

    async fn count_fruits(&self) -> Result<usize> {
        let store = self.store.read().await;
        Ok(store.fruits.len())
    }
}
