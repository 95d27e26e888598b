//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to configure storage client: {0}")]
    ConfigError(String),

    /// One upload in a batch failed. `index` is the position of the
    /// failed file in the caller's ordered input; partial results from
    /// the rest of the batch are discarded.
    #[error("Upload of item {index} failed: {reason}")]
    UploadFailed { index: usize, reason: String },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("AWS SDK error: {0}")]
    AwsSdk(String),
}

impl StorageError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn upload_failed(index: usize, reason: impl Into<String>) -> Self {
        Self::UploadFailed {
            index,
            reason: reason.into(),
        }
    }
}
