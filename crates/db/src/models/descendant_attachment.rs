//! Join records linking a descendant to an attachment figure.

use ahnenbaum_core::error::CoreError;
use ahnenbaum_core::types::DbId;
use ahnenbaum_core::validation::require_id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `descendant_attachments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DescendantAttachment {
    pub id: DbId,
    pub attachment_figure_id: DbId,
    pub descendant_id: DbId,
}

/// Raw join payload as received. Both ids are optional here so that a
/// missing id is reported by [`DescendantAttachmentInput::require`] with the
/// field name instead of as a generic decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescendantAttachmentInput {
    #[serde(default)]
    pub attachment_figure_id: Option<DbId>,
    #[serde(default)]
    pub descendant_id: Option<DbId>,
}

/// A join payload whose ids have been checked for presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewDescendantAttachment {
    pub attachment_figure_id: DbId,
    pub descendant_id: DbId,
}

impl DescendantAttachmentInput {
    pub fn require(&self) -> Result<NewDescendantAttachment, CoreError> {
        Ok(NewDescendantAttachment {
            attachment_figure_id: require_id(self.attachment_figure_id, "attachment_figure_id")?,
            descendant_id: require_id(self.descendant_id, "descendant_id")?,
        })
    }
}
