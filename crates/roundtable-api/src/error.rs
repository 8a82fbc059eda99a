//! API error types.
//!
//! Maps engine, oracle, render, and store failures onto a consistent wire
//! shape: `{"error": <short message>, "details": <raw reason>?}` with the
//! status codes from the error taxonomy. Nothing here is fatal to the
//! hosting process; every failure is scoped to one request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use roundtable_engine::EngineError;
use roundtable_oracle::OracleError;

use crate::pdf::RenderError;
use crate::store::StoreError;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error type for consistent error responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request - missing or invalid input, detected before any oracle
    /// call.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The oracle did not answer in time.
    #[error("oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// The oracle call itself failed.
    #[error("oracle error: {0}")]
    OracleFailed(String),

    /// The oracle responded but its content failed parsing or validation.
    #[error("{message}")]
    MalformedOutput {
        /// Short human-readable message.
        message: String,
        /// Raw validation failure reason.
        details: String,
    },

    /// Document rendering collaborator failed.
    #[error("render failed: {0}")]
    Render(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::OracleUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::OracleFailed(_) => StatusCode::BAD_GATEWAY,
            ApiError::MalformedOutput { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::MalformedOutput { details, .. } => Json(json!({
                "error": self.to_string(),
                "details": details,
            })),
            _ => Json(json!({
                "error": self.to_string()
            })),
        };
        (status, body).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        // Oracle-backed failures keep their transport/timeout distinction.
        if let Some(cause) = err.oracle_cause() {
            return match cause {
                OracleError::Unavailable(_) => ApiError::OracleUnavailable(err.to_string()),
                _ => ApiError::OracleFailed(err.to_string()),
            };
        }

        match err {
            EngineError::MissingInput(_) | EngineError::UnknownAgent(_) => {
                ApiError::BadRequest(err.to_string())
            }
            EngineError::InvalidSelection(details) => ApiError::MalformedOutput {
                message: "oracle returned an invalid agent selection".to_string(),
                details,
            },
            EngineError::MalformedDebateOutput(details) => ApiError::MalformedOutput {
                message: "oracle returned a malformed debate transcript".to_string(),
                details,
            },
            EngineError::Cancelled => ApiError::Internal("debate cancelled".to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::Render(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::OracleUnavailable("test".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::OracleFailed("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::MalformedOutput {
                message: "bad".into(),
                details: "reason".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Render("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_input_maps_to_bad_request() {
        let err: ApiError = EngineError::MissingInput("prd").into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_timeout_maps_to_unavailable() {
        let err: ApiError = EngineError::DebateFailed {
            source: OracleError::Unavailable("timed out".into()),
        }
        .into();
        assert!(matches!(err, ApiError::OracleUnavailable(_)));
    }

    #[test]
    fn test_transport_failure_maps_to_bad_gateway() {
        let err: ApiError = EngineError::SynthesisFailed {
            source: OracleError::Transport("connection refused".into()),
        }
        .into();
        assert!(matches!(err, ApiError::OracleFailed(_)));
    }

    #[test]
    fn test_malformed_output_carries_details() {
        let err: ApiError = EngineError::MalformedDebateOutput("expected 4 turns".into()).into();
        match err {
            ApiError::MalformedOutput { details, .. } => {
                assert_eq!(details, "expected 4 turns");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
