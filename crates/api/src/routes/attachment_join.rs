use axum::routing::{post, put};
use axum::Router;

use crate::handlers::attachment_join;
use crate::state::AppState;

/// Join routes, merged directly into `/api`.
///
/// Creation lives on the singular path, updates and deletes on the plural
/// one; existing clients depend on both spellings.
///
/// ```text
/// POST   /attachmentjoin          -> create
/// PUT    /attachmentjoins/{id}    -> update
/// DELETE /attachmentjoins/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/attachmentjoin", post(attachment_join::create))
        .route(
            "/attachmentjoins/{id}",
            put(attachment_join::update).delete(attachment_join::delete),
        )
}
