//! Fetch failure surfaced to the view state

use crate::api::ApiError;
use thiserror::Error;

/// A failed remote fetch, as recorded in the view state
///
/// Unlike [`ApiError`] this is cheap to clone and compare, so it can travel
/// inside [`Action`](super::Action) values and be shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    /// Human readable description
    pub message: String,
    /// HTTP status, when the server answered with one
    pub status: Option<u16>,
}

impl FetchError {
    /// Create a fetch error without a status code
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_error_keeps_code() {
        let err = FetchError::from(ApiError::Status {
            status: 503,
            body: String::new(),
        });
        assert_eq!(err.status, Some(503));
        assert_eq!(err.to_string(), "Server responded with status 503");
    }

    #[test]
    fn test_from_transport_error() {
        let err = FetchError::from(ApiError::Transport("connection refused".into()));
        assert_eq!(err.status, None);
        assert!(err.message.contains("connection refused"));
    }
}
