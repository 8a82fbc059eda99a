//! Request DTOs for the API.
//!
//! Required fields are `Option` so that a missing field reaches the handler
//! and is rejected with a 400 (the wire contract), rather than a
//! deserialization rejection.

use serde::Deserialize;

use roundtable_engine::DebateProtocol;

/// Select-agents request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectAgentsRequest {
    /// PRD text to analyze.
    pub prd: Option<String>,
}

/// Debate request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebateRequest {
    /// PRD text under debate.
    pub prd: Option<String>,
    /// Panel of role names, in speaking order.
    pub agents: Option<Vec<String>>,
    /// Requested round count; default comes from server configuration.
    pub rounds: Option<u32>,
    /// Debate protocol; defaults to per-turn.
    pub protocol: Option<DebateProtocol>,
}

/// A turn as submitted by the client for synthesis.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnPayload {
    /// Role name of the speaker.
    pub name: String,
    /// What was said.
    pub message: String,
    /// Optional 1-based round number.
    pub round: Option<u32>,
}

/// Synthesize request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SynthesizeRequest {
    /// Original PRD text.
    pub prd: Option<String>,
    /// Full debate transcript.
    pub debate: Option<Vec<TurnPayload>>,
}

/// Request carrying finalized PRD content (deployment plan, export, save).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrdContentRequest {
    /// Finalized PRD text.
    pub prd_content: Option<String>,
}
