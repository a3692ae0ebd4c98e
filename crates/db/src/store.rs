//! The persistence seam used by HTTP handlers.
//!
//! Handlers receive an `Arc<dyn GenealogyStore>` through application state,
//! so tests can swap in an in-memory implementation. [`PgStore`] is the
//! production implementation and delegates to the repositories.

use ahnenbaum_core::types::DbId;
use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::attachment_figure::{AttachmentFigure, AttachmentFigureInput};
use crate::models::descendant::{Descendant, DescendantInput};
use crate::models::descendant_attachment::NewDescendantAttachment;
use crate::repositories::{AttachmentFigureRepo, DescendantAttachmentRepo, DescendantRepo};
use crate::DbPool;

/// One method per resource operation. Each call issues a single statement.
///
/// `update_*` and `delete_*` return whether a row matched.
#[async_trait]
pub trait GenealogyStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_descendants(&self) -> Result<Vec<Descendant>, StoreError>;
    async fn find_descendant(&self, id: DbId) -> Result<Option<Descendant>, StoreError>;
    async fn create_descendant(&self, input: &DescendantInput) -> Result<DbId, StoreError>;
    async fn update_descendant(&self, id: DbId, input: &DescendantInput)
        -> Result<bool, StoreError>;
    async fn delete_descendant(&self, id: DbId) -> Result<bool, StoreError>;

    async fn list_attachment_figures(&self) -> Result<Vec<AttachmentFigure>, StoreError>;
    async fn create_attachment_figure(
        &self,
        input: &AttachmentFigureInput,
    ) -> Result<DbId, StoreError>;

    async fn create_descendant_attachment(
        &self,
        input: &NewDescendantAttachment,
    ) -> Result<DbId, StoreError>;
    async fn update_descendant_attachment(
        &self,
        id: DbId,
        input: &NewDescendantAttachment,
    ) -> Result<bool, StoreError>;
    async fn delete_descendant_attachment(&self, id: DbId) -> Result<bool, StoreError>;
}

/// PostgreSQL-backed store sharing one connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenealogyStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn list_descendants(&self) -> Result<Vec<Descendant>, StoreError> {
        DescendantRepo::list(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn find_descendant(&self, id: DbId) -> Result<Option<Descendant>, StoreError> {
        DescendantRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn create_descendant(&self, input: &DescendantInput) -> Result<DbId, StoreError> {
        DescendantRepo::create(&self.pool, input)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn update_descendant(
        &self,
        id: DbId,
        input: &DescendantInput,
    ) -> Result<bool, StoreError> {
        DescendantRepo::update(&self.pool, id, input)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn delete_descendant(&self, id: DbId) -> Result<bool, StoreError> {
        DescendantRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::from_sqlx_delete)
    }

    async fn list_attachment_figures(&self) -> Result<Vec<AttachmentFigure>, StoreError> {
        AttachmentFigureRepo::list(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn create_attachment_figure(
        &self,
        input: &AttachmentFigureInput,
    ) -> Result<DbId, StoreError> {
        AttachmentFigureRepo::create(&self.pool, input)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn create_descendant_attachment(
        &self,
        input: &NewDescendantAttachment,
    ) -> Result<DbId, StoreError> {
        DescendantAttachmentRepo::create(&self.pool, input)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn update_descendant_attachment(
        &self,
        id: DbId,
        input: &NewDescendantAttachment,
    ) -> Result<bool, StoreError> {
        DescendantAttachmentRepo::update(&self.pool, id, input)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn delete_descendant_attachment(&self, id: DbId) -> Result<bool, StoreError> {
        DescendantAttachmentRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::from_sqlx_delete)
    }
}
