use thiserror::Error;

/// Recoverable failures reported by store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("key not present: {0}")]
    KeyNotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    pub fn key_not_found(key: &str) -> Self { Self::KeyNotFound(key.to_string()) }

    /// Stable label for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::KeyNotFound(_) => "key_not_found",
            StoreError::InvalidInput(_) => "invalid_input",
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
