//! Client error types

use thiserror::Error;

/// Client error type
///
/// Server-side failures carry the `error` text from the response body.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 400: validation failure, duplicate email or bad body
    #[error("Validation error: {0}")]
    Validation(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 5xx
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status
    #[error("Unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },
}

impl ClientError {
    /// Message suitable for showing to a user
    pub fn message(&self) -> String {
        match self {
            ClientError::Validation(msg) | ClientError::NotFound(msg) => msg.clone(),
            ClientError::Server { message, .. } | ClientError::Unexpected { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
