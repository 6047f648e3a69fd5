//! Error types for tvgraph Core

use thiserror::Error;

/// Result type alias using tvgraph's Error
pub type Result<T> = std::result::Result<T, Error>;

/// tvgraph error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Malformed data on {id}: {reason}")]
    MalformedData { id: String, reason: String },

    #[error("Query execution failed: {0}")]
    QueryExecution(String),

    #[error("Invalid item id: {0}")]
    InvalidItemId(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
