//! Functional core for fruitbasket.
//!
//! Pure types, traits and functions shared by the server and the import
//! command. Nothing in this crate performs I/O; the `fruitbasket` crate
//! provides the concrete cache and storage backends.

pub mod cache;
pub mod fruit;
pub mod import;
pub mod listing;
pub mod storage;
