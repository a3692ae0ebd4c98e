//! Attachment figure entity model and DTOs.

use ahnenbaum_core::types::{DbId, TriState};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `attachment_figures` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AttachmentFigure {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub gender: String,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
}

/// Payload for `POST /api/attachment_figures`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AttachmentFigureInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_date: TriState<String>,
    #[serde(default)]
    pub death_date: TriState<String>,
}
