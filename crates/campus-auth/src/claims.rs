//! JWT claim structure for session tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity embedded in a session token.
///
/// Field names match the payload existing clients decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Account username
    pub usuario: String,
    /// Account email
    pub email: String,
    /// Account id (`usuario.id`)
    pub user_id: i32,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
