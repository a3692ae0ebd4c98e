//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A `Deserialize` input DTO shared by create and full-replace update

pub mod attachment_figure;
pub mod descendant;
pub mod descendant_attachment;
pub mod lineage;
