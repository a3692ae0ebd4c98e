//! Result types for the recursive and joined read queries on descendants.

use ahnenbaum_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One node of a descendant subtree.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DescendantNode {
    pub id: DbId,
    pub name: String,
    pub family_parent: Option<DbId>,
    pub related_by_attachment: Option<DbId>,
    pub generation: i32,
}

/// Flat row produced by the parent/attachment LEFT JOIN.
#[derive(Debug, Clone, FromRow)]
pub struct LineageRow {
    pub descendant_id: DbId,
    pub family_parent_id: Option<DbId>,
    pub family_parent_name: Option<String>,
    pub attachment_figure_id: Option<DbId>,
    pub attachment_figure_name: Option<String>,
}

/// Id and name of a related person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedRef {
    pub id: DbId,
    pub name: String,
}

/// A descendant together with its parent and attachment figure, either of
/// which may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lineage {
    pub descendant_id: DbId,
    pub family_parent: Option<RelatedRef>,
    pub attachment_figure: Option<RelatedRef>,
}

fn related(id: Option<DbId>, name: Option<String>) -> Option<RelatedRef> {
    id.map(|id| RelatedRef {
        id,
        name: name.unwrap_or_default(),
    })
}

impl From<LineageRow> for Lineage {
    fn from(row: LineageRow) -> Self {
        Self {
            descendant_id: row.descendant_id,
            family_parent: related(row.family_parent_id, row.family_parent_name),
            attachment_figure: related(row.attachment_figure_id, row.attachment_figure_name),
        }
    }
}
