//! Error types for the Discord OAuth2 client.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the client.
///
/// Provider-level errors (a 4xx with a structured `{error, error_description}`
/// body) are not errors at this layer; they come back as a parsed
/// [`ApiResponse::Failure`](crate::ApiResponse::Failure). Only caller contract
/// violations and transport faults land here.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or incomplete application configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required argument was empty.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Other HTTP transport failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body matched neither the success nor the error shape.
    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(Duration::from_secs(30)) // reqwest default
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
