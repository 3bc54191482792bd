//! Remote API error types
//!
//! Errors raised while building requests against the search endpoint or
//! decoding its responses. Transport details are flattened to strings so the
//! error can cross the fetch worker's channel.

use thiserror::Error;

/// Errors that can occur talking to the remote search endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    /// Endpoint URL could not be used
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The endpoint as given by the user
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },

    /// Network level failure (DNS, connect, TLS, timeout)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("Server responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if it could be read
        body: String,
    },

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// Response body was not the expected JSON shape
    #[error("Invalid response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the failure came from a status response
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
