//! # Campus Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address
//! - [`compat`]: switches for behaviors existing clients depend on
//!
//! # Example
//!
//! ```ignore
//! use campus_config::{CompatConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod compat;
pub mod cors;
pub mod jwt;
pub mod server;

pub use compat::CompatConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Parses the usual spellings of a boolean environment value.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
