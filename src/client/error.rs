//! Resource client error types
//!
//! Transport failures are captured as strings so errors stay `Clone` and
//! can be stored in session state and compared in tests.

use thiserror::Error;

/// Errors returned by resource lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Request never produced a response (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Requested record does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
