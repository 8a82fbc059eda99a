//! PRD synthesis handler.

use std::str::FromStr;

use axum::{extract::State, Json};
use tracing::info;

use roundtable_models::{AgentName, Turn};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{SynthesizeRequest, SynthesizeResponse};

/// POST /api/synthesize-prd (alias /api/synthesize) - Merge the debate into
/// an improved PRD.
pub async fn synthesize(
    State(state): State<AppState>,
    Json(req): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>> {
    let prd = req.prd.unwrap_or_default();
    let payload = req.debate.unwrap_or_default();
    if prd.trim().is_empty() || payload.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing PRD or debate history".to_string(),
        ));
    }

    let transcript = payload
        .into_iter()
        .map(|t| {
            let name = AgentName::from_str(&t.name)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            Ok(Turn {
                name,
                message: t.message,
                round: t.round,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let improved_prd =
        roundtable_engine::synthesize_prd(state.oracle.as_ref(), &prd, &transcript).await?;
    info!(turns = transcript.len(), "PRD synthesized");

    Ok(Json(SynthesizeResponse { improved_prd }))
}
