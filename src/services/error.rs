//! Error types for remote API calls.

use thiserror::Error;

/// Errors that can occur while talking to the remote APIs.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to reach the server
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with an unexpected status
    #[error("Upstream error: {status} from '{url}'")]
    Status { status: u16, url: String },

    /// Response body did not have the expected shape
    #[error("Unexpected response from '{url}': {message}")]
    Decode { url: String, message: String },

    /// Configured base URL cannot carry request paths
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Caller supplied arguments the request cannot be built from
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    /// Short machine-readable classification for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::Client(_) => "client_error",
            ServiceError::Connection { .. } => "connection_error",
            ServiceError::Timeout { .. } => "request_timeout",
            ServiceError::Status { .. } => "upstream_error",
            ServiceError::Decode { .. } => "decode_error",
            ServiceError::InvalidBaseUrl { .. } => "invalid_base_url",
            ServiceError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
