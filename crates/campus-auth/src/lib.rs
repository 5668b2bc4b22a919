//! # Campus Auth
//!
//! Session token service for the Campus API.
//!
//! - [`claims`]: the identity carried by a session token
//! - [`jwt`]: token issuance and verification
//!
//! Tokens are HS256-signed JWTs. Verification is purely cryptographic and
//! time based; whether the account still exists is the caller's concern.
//!
//! # Example
//!
//! ```ignore
//! use campus_auth::{issue_token, verify_token};
//! use campus_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(1, "ana1", "a@b.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.usuario, "ana1");
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{INVALID_TOKEN_MESSAGE, issue_token, verify_token};
