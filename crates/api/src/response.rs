//! Response bodies shared by the write handlers.

use ahnenbaum_core::types::DbId;
use serde::Serialize;

/// `{ "id": ... }` returned with `201 Created`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// `{ "message": ... }` returned by updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
