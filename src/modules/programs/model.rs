//! Program models and DTOs.
//!
//! Re-exports the program types from `campus-models`.

pub use campus_models::programs::*;
pub use campus_models::{
    Catalog, CatalogPayload, CreatedResponse, DeletedResponse, ErrorResponse, MutationResult,
};
