//! Bulk import of fruits from a JSON file.
//!
//! The file is read and parsed completely before the store is touched, and
//! the store is then replaced in a single atomic operation. Any failure
//! leaves the previous fruits in place.

mod error;
mod importer;

pub use error::ImportError;
pub use importer::{import_fruits, ImportReport};
