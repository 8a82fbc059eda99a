//! Save-PRD handler.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{PrdContentRequest, SavePrdResponse};

/// POST /api/save-prd - Hand the final PRD to the persistence collaborator.
pub async fn save_prd(
    State(state): State<AppState>,
    Json(req): Json<PrdContentRequest>,
) -> Result<Json<SavePrdResponse>> {
    let content = req.prd_content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(ApiError::BadRequest("Missing PRD content".to_string()));
    }

    state.store.save(&content).await?;

    Ok(Json(SavePrdResponse {
        success: true,
        saved_at: Utc::now(),
    }))
}
