#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ahnenbaum_core::types::DbId;
use ahnenbaum_db::models::attachment_figure::{AttachmentFigure, AttachmentFigureInput};
use ahnenbaum_db::models::descendant::{Descendant, DescendantInput};
use ahnenbaum_db::models::descendant_attachment::{
    DescendantAttachment, NewDescendantAttachment,
};
use ahnenbaum_db::{GenealogyStore, StoreError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ahnenbaum_api::router::build_app_router;
use ahnenbaum_api::state::AppState;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    next_id: DbId,
    descendants: Vec<Descendant>,
    figures: Vec<AttachmentFigure>,
    joins: Vec<DescendantAttachment>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn has_descendant(&self, id: DbId) -> bool {
        self.descendants.iter().any(|d| d.id == id)
    }

    fn has_figure(&self, id: DbId) -> bool {
        self.figures.iter().any(|f| f.id == id)
    }

    fn check_descendant_refs(&self, input: &DescendantInput) -> Result<(), StoreError> {
        if let Some(parent) = input.family_parent {
            if !self.has_descendant(parent) {
                return Err(StoreError::ForeignKey(
                    "family_descendant_family_parent_fkey".into(),
                ));
            }
        }
        if let Some(figure) = input.related_by_attachment {
            if !self.has_figure(figure) {
                return Err(StoreError::ForeignKey(
                    "family_descendant_related_by_attachment_fkey".into(),
                ));
            }
        }
        Ok(())
    }

    fn check_join_refs(&self, input: &NewDescendantAttachment) -> Result<(), StoreError> {
        if !self.has_figure(input.attachment_figure_id) {
            return Err(StoreError::ForeignKey(
                "descendant_attachments_attachment_figure_id_fkey".into(),
            ));
        }
        if !self.has_descendant(input.descendant_id) {
            return Err(StoreError::ForeignKey(
                "descendant_attachments_descendant_id_fkey".into(),
            ));
        }
        Ok(())
    }
}

fn descendant_row(id: DbId, input: &DescendantInput) -> Descendant {
    Descendant {
        id,
        name: input.name.clone(),
        description: input.description.clone(),
        image: input.image.clone(),
        generation: input.generation,
        gender: input.gender.clone(),
        birth_date: input.birth_date.clone().into_column(),
        death_date: input.death_date.clone().into_column(),
        family_parent: input.family_parent,
        related_by_attachment: input.related_by_attachment,
    }
}

/// A [`GenealogyStore`] double backed by vectors, mimicking the foreign keys
/// of the real schema. Counts every call so tests can assert that rejected
/// requests never reached the store.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the database were down.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn join_count(&self) -> usize {
        self.tables.lock().unwrap().joins.len()
    }

    pub fn joins(&self) -> Vec<DescendantAttachment> {
        self.tables.lock().unwrap().joins.clone()
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, Tables>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.tables.lock().unwrap())
    }
}

#[async_trait]
impl GenealogyStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.enter().map(|_| ())
    }

    async fn list_descendants(&self) -> Result<Vec<Descendant>, StoreError> {
        Ok(self.enter()?.descendants.clone())
    }

    async fn find_descendant(&self, id: DbId) -> Result<Option<Descendant>, StoreError> {
        Ok(self.enter()?.descendants.iter().find(|d| d.id == id).cloned())
    }

    async fn create_descendant(&self, input: &DescendantInput) -> Result<DbId, StoreError> {
        let mut tables = self.enter()?;
        tables.check_descendant_refs(input)?;
        let id = tables.next_id();
        tables.descendants.push(descendant_row(id, input));
        Ok(id)
    }

    async fn update_descendant(
        &self,
        id: DbId,
        input: &DescendantInput,
    ) -> Result<bool, StoreError> {
        let mut tables = self.enter()?;
        tables.check_descendant_refs(input)?;
        match tables.descendants.iter_mut().find(|d| d.id == id) {
            Some(row) => {
                *row = descendant_row(id, input);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_descendant(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.enter()?;
        if tables.descendants.iter().any(|d| d.family_parent == Some(id)) {
            return Err(StoreError::StillReferenced(
                "family_descendant_family_parent_fkey".into(),
            ));
        }
        if tables.joins.iter().any(|j| j.descendant_id == id) {
            return Err(StoreError::StillReferenced(
                "descendant_attachments_descendant_id_fkey".into(),
            ));
        }
        let before = tables.descendants.len();
        tables.descendants.retain(|d| d.id != id);
        Ok(tables.descendants.len() < before)
    }

    async fn list_attachment_figures(&self) -> Result<Vec<AttachmentFigure>, StoreError> {
        Ok(self.enter()?.figures.clone())
    }

    async fn create_attachment_figure(
        &self,
        input: &AttachmentFigureInput,
    ) -> Result<DbId, StoreError> {
        let mut tables = self.enter()?;
        let id = tables.next_id();
        tables.figures.push(AttachmentFigure {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            gender: input.gender.clone(),
            birth_date: input.birth_date.clone().into_column(),
            death_date: input.death_date.clone().into_column(),
        });
        Ok(id)
    }

    async fn create_descendant_attachment(
        &self,
        input: &NewDescendantAttachment,
    ) -> Result<DbId, StoreError> {
        let mut tables = self.enter()?;
        tables.check_join_refs(input)?;
        let id = tables.next_id();
        tables.joins.push(DescendantAttachment {
            id,
            attachment_figure_id: input.attachment_figure_id,
            descendant_id: input.descendant_id,
        });
        Ok(id)
    }

    async fn update_descendant_attachment(
        &self,
        id: DbId,
        input: &NewDescendantAttachment,
    ) -> Result<bool, StoreError> {
        let mut tables = self.enter()?;
        tables.check_join_refs(input)?;
        match tables.joins.iter_mut().find(|j| j.id == id) {
            Some(row) => {
                row.attachment_figure_id = input.attachment_figure_id;
                row.descendant_id = input.descendant_id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_descendant_attachment(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.enter()?;
        let before = tables.joins.len();
        tables.joins.retain(|j| j.id != id);
        Ok(tables.joins.len() < before)
    }
}

// ---------------------------------------------------------------------------
// App + request helpers
// ---------------------------------------------------------------------------

/// Build the full application router (same middleware stack as production)
/// over the given store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_app_router(AppState::new(store))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
