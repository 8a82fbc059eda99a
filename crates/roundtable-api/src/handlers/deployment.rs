//! Deployment-plan handler.

use axum::{extract::State, Json};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{DeploymentPlanResponse, PrdContentRequest};

/// POST /api/generate-deployment-plan - Derive a rollout plan from the final
/// PRD.
pub async fn generate_deployment_plan(
    State(state): State<AppState>,
    Json(req): Json<PrdContentRequest>,
) -> Result<Json<DeploymentPlanResponse>> {
    let content = req.prd_content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(ApiError::BadRequest("Missing PRD content".to_string()));
    }

    let deployment_plan =
        roundtable_engine::generate_deployment_plan(state.oracle.as_ref(), &content).await?;
    info!(plan_len = deployment_plan.len(), "Deployment plan generated");

    Ok(Json(DeploymentPlanResponse { deployment_plan }))
}
