//! Storage error types

use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported snapshot version {found} (supported up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<StorageError> for tvgraph_core::Error {
    fn from(err: StorageError) -> Self {
        tvgraph_core::Error::Storage(err.to_string())
    }
}
