//! Session token issuance and verification.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use campus_config::JwtConfig;
use campus_core::AppError;

use crate::claims::Claims;

pub const INVALID_TOKEN_MESSAGE: &str = "Token inválido.";

/// Issues a signed session token for an account.
///
/// The token expires `jwt_config.token_expiry` seconds after issuance.
pub fn issue_token(
    user_id: i32,
    usuario: &str,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.token_expiry;

    let claims = Claims {
        usuario: usuario.to_string(),
        email: email.to_string(),
        user_id,
        exp: exp.max(0) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a session token and returns its claims.
///
/// # Errors
///
/// Returns an `InvalidToken` error if the signature does not match, the
/// token is malformed, or it has expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::invalid_token(INVALID_TOKEN_MESSAGE))
}
