use axum::routing::get;
use axum::Router;

use crate::handlers::attachment_figure;
use crate::state::AppState;

/// Routes mounted at `/attachment_figures`. There is no per-id route.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(attachment_figure::list).post(attachment_figure::create),
    )
}
