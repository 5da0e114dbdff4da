use serde::{Deserialize, Serialize};

/// A fruit record as held by the store.
///
/// The `id` is assigned by the store and carries no meaning beyond
/// iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: i64,
    pub name: String,
}

impl Fruit {
    /// Creates a fruit with the given store ID and name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A fruit that has not been written to the store yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFruit {
    pub name: String,
}

impl NewFruit {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for NewFruit {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
