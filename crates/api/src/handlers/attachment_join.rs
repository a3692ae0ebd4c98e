//! Handlers for descendant/attachment-figure join records.
//!
//! Both ids are checked for presence before any statement runs; a reference
//! to a row that does not exist is caught by the foreign key and reported
//! as a validation error.

use ahnenbaum_db::models::descendant_attachment::DescendantAttachmentInput;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/attachmentjoin
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<DescendantAttachmentInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input = input.require()?;
    let id = state.store.create_descendant_attachment(&input).await?;

    tracing::info!(
        join_id = id,
        attachment_figure_id = input.attachment_figure_id,
        descendant_id = input.descendant_id,
        "Attachment join created"
    );

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/attachmentjoins/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<DescendantAttachmentInput>,
) -> AppResult<Json<MessageResponse>> {
    let input = input.require()?;
    if !state.store.update_descendant_attachment(id, &input).await? {
        return Err(AppError::not_found("Attachment join", id));
    }

    tracing::info!(join_id = id, "Attachment join updated");

    Ok(Json(MessageResponse::new("Attachment join updated successfully")))
}

/// DELETE /api/attachmentjoins/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.store.delete_descendant_attachment(id).await?;

    tracing::info!(join_id = id, deleted, "Attachment join delete requested");

    Ok(Json(MessageResponse::new("Attachment join deleted successfully")))
}
