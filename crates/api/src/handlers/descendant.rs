//! Handlers for the `/descendants` resource.
//!
//! Updates are full replacements: every column is overwritten from the
//! request body, absent fields becoming empty.

use ahnenbaum_db::models::descendant::{Descendant, DescendantInput};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody, ValidatedJson};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/descendants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Descendant>>> {
    let descendants = state.store.list_descendants().await?;
    Ok(Json(descendants))
}

/// GET /api/descendants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Descendant>> {
    let descendant = state
        .store
        .find_descendant(id)
        .await?
        .ok_or(AppError::not_found("Descendant", id))?;
    Ok(Json(descendant))
}

/// POST /api/descendants
///
/// Rejects a missing or empty `name` before touching the database.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<DescendantInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.store.create_descendant(&input).await?;

    tracing::info!(descendant_id = id, generation = input.generation, "Descendant created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/descendants/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<DescendantInput>,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.update_descendant(id, &input).await? {
        return Err(AppError::not_found("Descendant", id));
    }

    tracing::info!(descendant_id = id, "Descendant updated");

    Ok(Json(MessageResponse::new("Descendant updated successfully")))
}

/// DELETE /api/descendants/{id}
///
/// Idempotent: deleting an id that does not exist still succeeds.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.store.delete_descendant(id).await?;

    tracing::info!(descendant_id = id, deleted, "Descendant delete requested");

    Ok(Json(MessageResponse::new("Descendant deleted successfully")))
}
