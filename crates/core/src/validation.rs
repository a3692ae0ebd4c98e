//! Presence checks applied by handlers before any statement is issued.

use crate::error::CoreError;
use crate::types::DbId;

/// Require a foreign-key id to be present and positive.
pub fn require_id(value: Option<DbId>, field: &str) -> Result<DbId, CoreError> {
    match value {
        None => Err(CoreError::Validation(format!("{field} is required"))),
        Some(id) if id <= 0 => Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {id}"
        ))),
        Some(id) => Ok(id),
    }
}
