//! `/health`, mounted at the root next to `/api`.
//!
//! Always answers 200; a failed store ping only downgrades the status so
//! load balancers can tell "process up, database down" from "process gone".

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_ping(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ping = state.store.ping().await;
    if let Err(err) = &ping {
        tracing::warn!(error = %err, "Health check: store unreachable");
    }
    Json(HealthResponse::from_ping(ping.is_ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
