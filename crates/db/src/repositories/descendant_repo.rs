//! Repository for the `family_descendant` table.

use ahnenbaum_core::types::DbId;
use sqlx::PgPool;

use crate::models::descendant::{Descendant, DescendantInput};
use crate::models::lineage::{DescendantNode, Lineage, LineageRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image, generation, gender, birth_date, death_date, \
     family_parent, related_by_attachment";

/// Provides CRUD operations for descendants plus the tree/lineage reads.
pub struct DescendantRepo;

impl DescendantRepo {
    /// List every descendant. No filter and no ordering guarantee.
    pub async fn list(pool: &PgPool) -> Result<Vec<Descendant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_descendant");
        sqlx::query_as::<_, Descendant>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a descendant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Descendant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_descendant WHERE id = $1");
        sqlx::query_as::<_, Descendant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new descendant, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &DescendantInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO family_descendant
                (name, description, image, generation, gender, birth_date, death_date,
                 family_parent, related_by_attachment)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.generation)
        .bind(&input.gender)
        .bind(input.birth_date.clone().into_column())
        .bind(input.death_date.clone().into_column())
        .bind(input.family_parent)
        .bind(input.related_by_attachment)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every column of a descendant. Returns `false` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &DescendantInput,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE family_descendant SET
                name = $2,
                description = $3,
                image = $4,
                generation = $5,
                gender = $6,
                birth_date = $7,
                death_date = $8,
                family_parent = $9,
                related_by_attachment = $10
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.generation)
        .bind(&input.gender)
        .bind(input.birth_date.clone().into_column())
        .bind(input.death_date.clone().into_column())
        .bind(input.family_parent)
        .bind(input.related_by_attachment)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a descendant by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM family_descendant WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Collect `root_id` and every row reachable from it through
    /// `family_parent` links (children, grandchildren, ...).
    ///
    /// Returns an empty vector when `root_id` does not exist. `UNION` (not
    /// `UNION ALL`) keeps a cyclic `family_parent` chain from recursing forever.
    pub async fn subtree(pool: &PgPool, root_id: DbId) -> Result<Vec<DescendantNode>, sqlx::Error> {
        sqlx::query_as::<_, DescendantNode>(
            "WITH RECURSIVE subtree AS (
                SELECT id, name, family_parent, related_by_attachment, generation
                FROM family_descendant
                WHERE id = $1
                UNION
                SELECT fd.id, fd.name, fd.family_parent, fd.related_by_attachment, fd.generation
                FROM family_descendant fd
                INNER JOIN subtree s ON fd.family_parent = s.id
             )
             SELECT id, name, family_parent, related_by_attachment, generation FROM subtree",
        )
        .bind(root_id)
        .fetch_all(pool)
        .await
    }

    /// Look up a descendant's parent and related attachment figure.
    ///
    /// Returns `None` only when the descendant itself does not exist.
    pub async fn parent_and_attachment(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Lineage>, sqlx::Error> {
        let row = sqlx::query_as::<_, LineageRow>(
            "SELECT
                fd.id   AS descendant_id,
                fp.id   AS family_parent_id,
                fp.name AS family_parent_name,
                af.id   AS attachment_figure_id,
                af.name AS attachment_figure_name
             FROM family_descendant fd
             LEFT JOIN family_descendant fp ON fd.family_parent = fp.id
             LEFT JOIN attachment_figures af ON fd.related_by_attachment = af.id
             WHERE fd.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(Lineage::from))
    }
}
