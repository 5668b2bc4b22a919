//! Student models and DTOs.
//!
//! Re-exports the student types from `campus-models`.

pub use campus_models::students::*;
pub use campus_models::{CreatedResponse, DeletedResponse, ErrorResponse, MutationResult};
