use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while importing a fruits file.
///
/// The display strings are the messages printed by `load_fruits`.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid JSON in file: {}", path.display())]
    InvalidFormat { path: PathBuf },

    #[error("Error loading data: {0}")]
    Load(String),
}
