pub mod attachment_figure;
pub mod attachment_join;
pub mod descendant;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /descendants                       list, create
/// /descendants/{id}                  get, update, delete
/// /attachment_figures                list, create
/// /attachmentjoin                    create
/// /attachmentjoins/{id}              update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/descendants", descendant::router())
        .nest("/attachment_figures", attachment_figure::router())
        .merge(attachment_join::router())
}
