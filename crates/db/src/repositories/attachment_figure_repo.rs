//! Repository for the `attachment_figures` table.

use ahnenbaum_core::types::DbId;
use sqlx::PgPool;

use crate::models::attachment_figure::{AttachmentFigure, AttachmentFigureInput};

const COLUMNS: &str = "id, name, description, image, gender, birth_date, death_date";

/// Attachment figures can only be listed and created.
pub struct AttachmentFigureRepo;

impl AttachmentFigureRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<AttachmentFigure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attachment_figures");
        sqlx::query_as::<_, AttachmentFigure>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new attachment figure, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &AttachmentFigureInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO attachment_figures
                (name, description, image, gender, birth_date, death_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image)
        .bind(&input.gender)
        .bind(input.birth_date.clone().into_column())
        .bind(input.death_date.clone().into_column())
        .fetch_one(pool)
        .await
    }
}
