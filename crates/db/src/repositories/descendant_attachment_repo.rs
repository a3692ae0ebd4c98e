//! Repository for the `descendant_attachments` join table.

use ahnenbaum_core::types::DbId;
use sqlx::PgPool;

use crate::models::descendant_attachment::{DescendantAttachment, NewDescendantAttachment};

pub struct DescendantAttachmentRepo;

impl DescendantAttachmentRepo {
    /// Insert a join row, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        input: &NewDescendantAttachment,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO descendant_attachments (attachment_figure_id, descendant_id)
             VALUES ($1, $2)
             RETURNING id",
        )
        .bind(input.attachment_figure_id)
        .bind(input.descendant_id)
        .fetch_one(pool)
        .await
    }

    /// Fetch one join row. No HTTP operation reads joins back; this exists
    /// so callers (integration tests, maintenance tooling) can verify what a
    /// create or update actually stored.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DescendantAttachment>, sqlx::Error> {
        sqlx::query_as::<_, DescendantAttachment>(
            "SELECT id, attachment_figure_id, descendant_id
             FROM descendant_attachments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Replace both ids of a join row. Returns `false` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewDescendantAttachment,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE descendant_attachments
             SET attachment_figure_id = $2, descendant_id = $3
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.attachment_figure_id)
        .bind(input.descendant_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a join row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM descendant_attachments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
