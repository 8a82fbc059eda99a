//! Error types for the debate engine.

use thiserror::Error;

use roundtable_models::UnknownAgent;
use roundtable_oracle::OracleError;

/// Errors that can occur in engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input was missing or empty. Detected before any oracle
    /// call; rejected without side effects.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// An agent identifier was not in the closed registry set.
    #[error(transparent)]
    UnknownAgent(#[from] UnknownAgent),

    /// The oracle call for agent selection failed.
    #[error("agent selection failed: {source}")]
    SelectionFailed {
        /// Underlying oracle failure.
        #[source]
        source: OracleError,
    },

    /// The oracle responded to a selection request with output that does not
    /// parse as a list of registry role names.
    #[error("invalid agent selection: {0}")]
    InvalidSelection(String),

    /// An oracle call within a debate failed. The partial transcript is
    /// discarded.
    #[error("debate failed: {source}")]
    DebateFailed {
        /// Underlying oracle failure.
        #[source]
        source: OracleError,
    },

    /// The oracle responded to a structured debate request but the content
    /// failed parsing or speaking-order validation.
    #[error("malformed debate output: {0}")]
    MalformedDebateOutput(String),

    /// The oracle call for PRD synthesis failed.
    #[error("synthesis failed: {source}")]
    SynthesisFailed {
        /// Underlying oracle failure.
        #[source]
        source: OracleError,
    },

    /// The oracle call for deployment-plan generation failed.
    #[error("deployment plan generation failed: {source}")]
    PlanGenerationFailed {
        /// Underlying oracle failure.
        #[source]
        source: OracleError,
    },

    /// The operation was cancelled between turns.
    #[error("debate cancelled")]
    Cancelled,
}

impl EngineError {
    /// The underlying oracle failure, when this error wraps one.
    pub fn oracle_cause(&self) -> Option<&OracleError> {
        match self {
            Self::SelectionFailed { source }
            | Self::DebateFailed { source }
            | Self::SynthesisFailed { source }
            | Self::PlanGenerationFailed { source } => Some(source),
            _ => None,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
