use std::sync::Arc;

use ahnenbaum_db::GenealogyStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway. PostgreSQL in production, in-memory in tests.
    pub store: Arc<dyn GenealogyStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn GenealogyStore>) -> Self {
        Self { store }
    }
}
