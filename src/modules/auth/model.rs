//! Account models and DTOs.
//!
//! Re-exports the account types from `campus-models`.

pub use campus_models::accounts::*;
pub use campus_models::{ErrorResponse, MessageResponse, TokenResponse};
