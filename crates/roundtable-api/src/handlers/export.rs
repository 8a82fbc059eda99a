//! Document export handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::html::render_html_document;
use crate::state::AppState;
use crate::types::PrdContentRequest;

/// POST /api/download-pdf - Render the final PRD as a PDF attachment.
pub async fn download_pdf(
    State(state): State<AppState>,
    Json(req): Json<PrdContentRequest>,
) -> Result<Response> {
    let content = req.prd_content.unwrap_or_default();
    if content.trim().is_empty() {
        return Err(ApiError::BadRequest("Missing PRD content".to_string()));
    }

    let html = render_html_document(&content);
    let pdf = state.renderer.render_pdf(&html).await?;
    info!(pdf_len = pdf.len(), "PDF rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"final-prd.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}
