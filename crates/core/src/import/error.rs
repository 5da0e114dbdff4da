use thiserror::Error;

/// Errors that can occur while parsing an import document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// The document is valid JSON but not an array.
    #[error("Expected a JSON array of fruits, found {0}")]
    NotAnArray(&'static str),
    /// An element of the array is not a fruit object.
    #[error("Invalid fruit at index {index}: {reason}")]
    InvalidFruit { index: usize, reason: String },
}
