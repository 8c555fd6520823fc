use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, service, and storage layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(u64),
    #[error("Storage unavailable")]
    StorageUnavailable,
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}
