//! Subject models and DTOs.
//!
//! Re-exports the subject types from `campus-models`.

pub use campus_models::subjects::*;
pub use campus_models::{
    Catalog, CatalogPayload, CreatedResponse, DeletedResponse, ErrorResponse, MutationResult,
};
