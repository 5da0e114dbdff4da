//! SQLite row conversion functions.

use fruitbasket_core::fruit::Fruit;
use rusqlite::Row;

/// Convert a SQLite row to a Fruit.
///
/// Expected columns: id, name
pub fn row_to_fruit(row: &Row) -> rusqlite::Result<Fruit> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;

    Ok(Fruit { id, name })
}
