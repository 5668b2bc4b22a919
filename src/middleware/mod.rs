//! Middleware for cross-cutting request concerns.
//!
//! - [`auth`]: the authorization gate and the [`auth::AuthUser`] extractor
//! - [`status`]: rewrites error statuses according to the configured policy
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and stores the claims in the
//!    request extensions
//! 3. Handlers that want the caller's identity extract [`auth::AuthUser`]

pub mod auth;
pub mod status;
