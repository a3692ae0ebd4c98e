use axum::routing::get;
use axum::Router;

use crate::handlers::descendant;
use crate::state::AppState;

/// Routes mounted at `/descendants`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(descendant::list).post(descendant::create))
        .route(
            "/{id}",
            get(descendant::get_by_id)
                .put(descendant::update)
                .delete(descendant::delete),
        )
}
