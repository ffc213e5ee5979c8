//! Flag store error types

use thiserror::Error;

/// Errors raised by a key-value store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The host refused access to its storage (private mode, quota, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Unavailable("localStorage disabled".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: localStorage disabled");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
