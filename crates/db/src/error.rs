/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors surfaced by a [`GenealogyStore`](crate::GenealogyStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert or update referenced a row that does not exist. Carries the
    /// violated constraint name.
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// A delete was refused because other rows still reference the target.
    #[error("Row is still referenced: {0}")]
    StillReferenced(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    /// Lift a raw sqlx error from an insert or update, recognising
    /// foreign-key violations.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match foreign_key_constraint(&err) {
            Some(constraint) => {
                tracing::debug!(%constraint, "Write referenced a missing row");
                StoreError::ForeignKey(constraint)
            }
            None => StoreError::Database(err),
        }
    }

    /// Lift a raw sqlx error from a delete. A foreign-key violation here
    /// means dependents exist, not that the request named a missing row.
    pub fn from_sqlx_delete(err: sqlx::Error) -> Self {
        match foreign_key_constraint(&err) {
            Some(constraint) => {
                tracing::debug!(%constraint, "Delete blocked by referencing rows");
                StoreError::StillReferenced(constraint)
            }
            None => StoreError::Database(err),
        }
    }
}

fn foreign_key_constraint(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some(FOREIGN_KEY_VIOLATION) {
        return None;
    }
    Some(db_err.constraint().unwrap_or("unknown").to_string())
}
