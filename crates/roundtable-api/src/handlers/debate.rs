//! Debate handler.

use std::str::FromStr;

use axum::{extract::State, Json};
use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use roundtable_models::AgentName;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{DebateRequest, DebateResponse};

/// POST /api/debate - Run a debate over a PRD.
///
/// The debate runs in a spawned task holding a cancellation token whose
/// guard lives in this handler: when the client disconnects, axum drops the
/// request future, the guard cancels the token, and the task stops between
/// turns instead of running the remaining oracle calls to completion.
pub async fn debate(
    State(state): State<AppState>,
    Json(req): Json<DebateRequest>,
) -> Result<Json<DebateResponse>> {
    let prd = req.prd.unwrap_or_default();
    if prd.trim().is_empty() {
        return Err(ApiError::BadRequest("Missing PRD or agents".to_string()));
    }
    let names = req.agents.unwrap_or_default();
    if names.is_empty() {
        return Err(ApiError::BadRequest("Missing PRD or agents".to_string()));
    }

    let agents = names
        .iter()
        .map(|name| {
            AgentName::from_str(name).map_err(|e| ApiError::BadRequest(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut config = (*state.debate).clone();
    if let Some(rounds) = req.rounds {
        config = config.with_rounds(rounds);
    }
    if let Some(protocol) = req.protocol {
        config = config.with_protocol(protocol);
    }

    let debate_id = Uuid::new_v4();
    info!(
        %debate_id,
        agents = agents.len(),
        rounds = config.rounds,
        protocol = ?config.protocol,
        "Debate requested"
    );

    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();

    let oracle = state.oracle.clone();
    let task = tokio::spawn(async move {
        roundtable_engine::run_debate(oracle.as_ref(), &prd, &agents, &config, &cancel).await
    });

    let transcript = task
        .await
        .map_err(|e| ApiError::Internal(format!("debate task failed: {}", e)))??;
    drop(guard);

    info!(%debate_id, turns = transcript.len(), "Debate completed");
    Ok(Json(DebateResponse { debate: transcript }))
}
