//! Pure parsing of fruit import documents.
//!
//! An import document is a JSON array of objects, each with a `name` field.
//! Parsing finishes before anything touches the store, so a bad document
//! never causes a partial import.

mod error;
mod parse;

pub use error::ParseError;
pub use parse::parse_fruits;
