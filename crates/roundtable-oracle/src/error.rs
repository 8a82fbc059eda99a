//! Error types for the oracle crate.

use thiserror::Error;

/// Errors that can occur when invoking the text-generation oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Configuration error (missing API key, bad model name).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP request could not be completed.
    #[error("oracle request failed: {0}")]
    Transport(String),

    /// The oracle did not answer within the configured timeout.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle answered with a non-success status.
    #[error("oracle API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the oracle.
        status: u16,
        /// Error body returned by the oracle.
        message: String,
    },

    /// The oracle response body could not be decoded.
    #[error("failed to parse oracle response: {0}")]
    ResponseParse(String),

    /// The oracle answered successfully but produced no text.
    #[error("oracle returned an empty response")]
    Empty,
}

/// Result type for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OracleError::Api {
            status: 429,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "oracle API error 429: quota exceeded");

        let err = OracleError::Unavailable("request timed out".into());
        assert_eq!(err.to_string(), "oracle unavailable: request timed out");
    }
}
