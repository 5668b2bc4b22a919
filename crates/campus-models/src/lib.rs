//! # Campus Models
//!
//! Row types and request/response DTOs for the Campus API.
//!
//! - [`accounts`]: login identities (`usuario`), registration and login bodies
//! - [`catalog`]: the [`Catalog`] trait shared by programs and subjects
//! - [`programs`]: degree programs (`carrera`)
//! - [`subjects`]: subjects (`materia`)
//! - [`students`]: students (`alumno`)
//! - [`responses`]: success and error envelopes
//!
//! Request bodies implement [`validator::Validate`] and
//! [`campus_core::Payload`]; fields default when absent so that a missing
//! field and a field without letters fail the same rule.

pub mod accounts;
pub mod catalog;
pub mod programs;
pub mod responses;
pub mod students;
pub mod subjects;

pub use catalog::{Catalog, CatalogMessages, CatalogPayload};
pub use responses::{
    CreatedResponse, DeletedResponse, ErrorResponse, MessageResponse, MutationResult,
    TokenResponse,
};

/// Stored form of every name-like field.
pub fn normalize_name(value: &str) -> String {
    value.to_uppercase()
}
