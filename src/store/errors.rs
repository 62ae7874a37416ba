//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Nothing has been persisted yet
    #[error("Record store is empty")]
    Missing,

    /// Persisted data is not a list of records
    #[error("Corrupt record data: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    IoError(String),

    /// A previous holder of the in-memory lock panicked
    #[error("Record store lock poisoned")]
    Poisoned,
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            StoreError::Missing
        } else {
            StoreError::IoError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Corrupt(e.to_string())
    }
}
