//! Shared types, errors, and validation helpers for the genealogy backend.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod error;
pub mod types;
pub mod validation;
