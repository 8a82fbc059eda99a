//! Agent selection handler.

use axum::{extract::State, Json};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{SelectAgentsRequest, SelectAgentsResponse};

/// POST /api/select-agents - Pick a debate panel for a PRD.
pub async fn select_agents(
    State(state): State<AppState>,
    Json(req): Json<SelectAgentsRequest>,
) -> Result<Json<SelectAgentsResponse>> {
    let prd = req.prd.unwrap_or_default();
    if prd.trim().is_empty() {
        return Err(ApiError::BadRequest("PRD text is required".to_string()));
    }

    let agents = roundtable_engine::select_agents(state.oracle.as_ref(), &prd).await?;
    info!(panel = agents.len(), "Agent panel selected");

    Ok(Json(SelectAgentsResponse {
        agents: agents.iter().map(|a| a.to_string()).collect(),
    }))
}
