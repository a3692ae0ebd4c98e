//! Handlers for the `/attachment_figures` resource (list and create only).

use ahnenbaum_db::models::attachment_figure::{AttachmentFigure, AttachmentFigureInput};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// GET /api/attachment_figures
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AttachmentFigure>>> {
    let figures = state.store.list_attachment_figures().await?;
    Ok(Json(figures))
}

/// POST /api/attachment_figures
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<AttachmentFigureInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.store.create_attachment_figure(&input).await?;

    tracing::info!(attachment_figure_id = id, "Attachment figure created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
