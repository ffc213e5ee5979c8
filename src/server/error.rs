//! Server Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Binding or serving failed at the socket level
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The frontend bundle directory is missing or unusable
    #[error("Invalid dist directory: {0}")]
    Dist(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;
