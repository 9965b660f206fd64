use std::result::Result as StdResult;

use fintrack_config::ConfigError as TrackerConfigError;
use fintrack_core::CoreError;
use thiserror::Error;

/// Unified error type for the tracker and the layers beneath it.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
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

impl From<CoreError> for TrackerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TransactionNotFound(id) => {
                TrackerError::NotFound(format!("transaction {} not found", id))
            }
            CoreError::RecurringExpenseNotFound(id) => {
                TrackerError::NotFound(format!("recurring expense {} not found", id))
            }
            CoreError::Validation(message) => TrackerError::InvalidInput(message),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                TrackerError::StorageError(message)
            }
            CoreError::Io(err) => TrackerError::StorageError(err.to_string()),
        }
    }
}

impl From<TrackerConfigError> for TrackerError {
    fn from(err: TrackerConfigError) -> Self {
        match err {
            TrackerConfigError::Io { .. } => TrackerError::StorageError(err.to_string()),
            TrackerConfigError::Parse { .. } | TrackerConfigError::Encode(_) => {
                TrackerError::ConfigError(err.to_string())
            }
        }
    }
}
