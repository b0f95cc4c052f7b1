//! Error types for the massCode API client.

use std::fmt;

/// Errors reported by the json-server API itself (non-2xx responses).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Resource not found (404).
    NotFound { resource: String, id: String },
    /// The server rejected the request body or query (400).
    Validation { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::Validation { message } => write!(f, "Validation error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the appropriate CLI exit code for this error.
    ///
    /// The server answered, so this is never a network failure.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with an error status.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Transport failure: connection refused, timeout, body encoding or
    /// decoding.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Returns the CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(e) => e.exit_code(),
            Error::Http(e) if e.is_connect() || e.is_timeout() => 3,
            _ => 2,
        }
    }

    /// Returns the HTTP status if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(ApiError::Http { status, .. }) => Some(*status),
            Error::Api(ApiError::NotFound { .. }) => Some(404),
            Error::Api(ApiError::Validation { .. }) => Some(400),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;
