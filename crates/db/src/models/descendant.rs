//! Descendant entity model and DTOs.

use ahnenbaum_core::types::{DbId, TriState};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `family_descendant` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Descendant {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub generation: i32,
    pub gender: String,
    /// NULL when unknown, `""` when explicitly left empty.
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    /// Parent descendant, if recorded.
    pub family_parent: Option<DbId>,
    /// Related attachment figure, if recorded.
    pub related_by_attachment: Option<DbId>,
}

/// Payload for `POST` and `PUT` on `/api/descendants`.
///
/// Every field defaults when absent so a `PUT` overwrites the whole row.
/// Only creates run [`Validate`]; the `name` rule does not apply to updates.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DescendantInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub generation: i32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_date: TriState<String>,
    #[serde(default)]
    pub death_date: TriState<String>,
    #[serde(default)]
    pub family_parent: Option<DbId>,
    #[serde(default)]
    pub related_by_attachment: Option<DbId>,
}
