//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS fruits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
"#;

pub const SELECT_FRUITS: &str = r#"
SELECT id, name
FROM fruits
ORDER BY id ASC
"#;

pub const COUNT_FRUITS: &str = r#"
SELECT COUNT(*)
FROM fruits
"#;

pub const INSERT_FRUIT: &str = r#"
INSERT INTO fruits (name)
VALUES (?1)
"#;

pub const DELETE_ALL_FRUITS: &str = r#"
DELETE FROM fruits
"#;
