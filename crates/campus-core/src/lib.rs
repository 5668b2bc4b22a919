//! # Campus Core
//!
//! Core types shared by every Campus crate:
//!
//! - [`errors`]: the [`AppError`] taxonomy and its HTTP response conversion
//! - [`deserialize`]: lenient field deserializers for request bodies
//! - [`password`]: bcrypt password hashing and verification
//! - [`validation`]: payload validation helpers used by the request DTOs
//!
//! # Example
//!
//! ```ignore
//! use campus_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("clave1")?;
//! if !verify_password("clave1", &hash)? {
//!     return Err(AppError::bad_password("Password incorrecto"));
//! }
//! ```

pub mod deserialize;
pub mod errors;
pub mod password;
pub mod validation;

pub use deserialize::deserialize_lenient_i32;
pub use errors::{AppError, ErrorKind, StatusPolicy, UNEXPECTED_MESSAGE};
pub use password::{hash_password, verify_password};
pub use validation::{Payload, contains_letter};
