//! Error types for the homewatch clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review or bot APIs
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection, timeout)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned an error status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// The response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The bot API accepted the request but reported a delivery failure
    #[error("Delivery rejected: {0}")]
    Delivery(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// True for an HTTP 404 from the remote endpoint
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// True for any non-404 error status from the remote endpoint
    pub fn is_http_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// True for faults on our side of the wire: transport or parse failures
    pub fn is_program_fault(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = ClientError::api_error(404, "no such endpoint");
        assert!(err.is_not_found());
        assert!(err.is_http_error());
        assert!(!err.is_program_fault());
    }

    #[test]
    fn test_other_http_classification() {
        let err = ClientError::api_error(500, "boom");
        assert!(!err.is_not_found());
        assert!(err.is_http_error());
        assert!(!err.is_program_fault());
    }

    #[test]
    fn test_parse_is_program_fault() {
        let err = ClientError::Parse("bad json".to_string());
        assert!(err.is_program_fault());
        assert!(!err.is_http_error());
    }
}
