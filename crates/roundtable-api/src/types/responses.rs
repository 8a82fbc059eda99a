//! Response DTOs for the API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use roundtable_models::Turn;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Select-agents response.
#[derive(Debug, Clone, Serialize)]
pub struct SelectAgentsResponse {
    /// Selected role names, in speaking order.
    pub agents: Vec<String>,
}

/// Debate response.
#[derive(Debug, Clone, Serialize)]
pub struct DebateResponse {
    /// The transcript, in chronological speaking order.
    pub debate: Vec<Turn>,
}

/// Synthesize response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    /// The consolidated improved PRD.
    pub improved_prd: String,
}

/// Deployment-plan response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPlanResponse {
    /// Plain-text rollout plan.
    pub deployment_plan: String,
}

/// Save-PRD response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePrdResponse {
    /// Whether the save was accepted.
    pub success: bool,
    /// When the save was accepted.
    pub saved_at: DateTime<Utc>,
}
