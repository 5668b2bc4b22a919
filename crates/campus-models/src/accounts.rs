//! Login identities (`usuario`).

use serde::Deserialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use campus_core::{Payload, contains_letter};

/// A stored account, including its password hash.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i32,
    pub usuario: String,
    pub clave: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub usuario: String,
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub clave: String,
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub email: String,
}

impl Payload for RegisterRequest {
    const REJECTION: &'static str = "No enviaste todos los datos necesarios";
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub usuario: String,
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub clave: String,
}

impl Payload for LoginRequest {
    const REJECTION: &'static str = "No enviaste los datos necesarios";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_requires_every_field() {
        let dto: RegisterRequest =
            serde_json::from_str(r#"{"usuario":"ana1","clave":"clave1"}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: RegisterRequest =
            serde_json::from_str(r#"{"usuario":"ana1","clave":"clave1","email":"a@b.com"}"#)
                .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_numeric_password() {
        let dto: LoginRequest =
            serde_json::from_str(r#"{"usuario":"ana1","clave":"123456"}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
