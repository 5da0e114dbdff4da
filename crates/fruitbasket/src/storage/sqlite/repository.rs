//! SQLite repository implementation.
//!
//! Implements `FruitRepository` from `fruitbasket_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use fruitbasket_core::fruit::{Fruit, NewFruit};
use fruitbasket_core::storage::{FruitRepository, RepositoryError, Result};

use super::conversions::row_to_fruit;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl FruitRepository for SqliteRepository {
    async fn list_fruits(&self) -> Result<Vec<Fruit>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_FRUITS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_fruit).map_err(wrap_err)?;

                let mut fruits = Vec::new();
                for row_result in rows {
                    fruits.push(row_result.map_err(wrap_err)?);
                }
                Ok(fruits)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn replace_all(&self, fruits: &[NewFruit]) -> Result<usize> {
        let names: Vec<String> = fruits.iter().map(|f| f.name.clone()).collect();

        self.conn
            .call(move |conn| {
                // Dropping the transaction without commit rolls everything back.
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(schema::DELETE_ALL_FRUITS, [])
                    .map_err(wrap_err)?;

                {
                    let mut stmt = tx.prepare(schema::INSERT_FRUIT).map_err(wrap_err)?;
                    for name in &names {
                        stmt.execute(rusqlite::params![name]).map_err(wrap_err)?;
                    }
                }

                tx.commit().map_err(wrap_err)?;
                Ok(names.len())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn count_fruits(&self) -> Result<usize> {
        let count = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_FRUITS, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        usize::try_from(count).map_err(|e| RepositoryError::InvalidData(e.to_string()))
    }
}
