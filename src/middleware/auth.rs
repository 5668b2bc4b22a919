use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

use campus_auth::{Claims, INVALID_TOKEN_MESSAGE, verify_token};
use campus_core::AppError;

use crate::security_event;
use crate::state::AppState;

pub const MISSING_TOKEN_MESSAGE: &str = "No estas logueado";

/// Identity of the caller, as verified by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> i32 {
        self.0.user_id
    }

    pub fn username(&self) -> &str {
        &self.0.usuario
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

/// Authorization gate for every protected route.
///
/// Requires an `Authorization` header holding a session token, optionally
/// prefixed with `Bearer `. The verified claims are attached to the request
/// as an [`AuthUser`]; no further authorization is applied.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            security_event!("auth.missing_token", path = %req.uri().path());
            AppError::missing_token(MISSING_TOKEN_MESSAGE)
        })?;

    let raw = header_value.to_str().map_err(|_| {
        security_event!("auth.invalid_header", path = %req.uri().path());
        AppError::invalid_token(INVALID_TOKEN_MESSAGE)
    })?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

    let claims = verify_token(token, &state.jwt_config).inspect_err(|_| {
        security_event!("auth.invalid_token", path = %req.uri().path());
    })?;

    if state.compat.verify_account_exists {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM usuario WHERE id = $1)",
        )
        .bind(claims.user_id)
        .fetch_one(&state.db)
        .await?;

        if !exists {
            security_event!("auth.unknown_account", user_id = claims.user_id);
            return Err(AppError::invalid_token(INVALID_TOKEN_MESSAGE));
        }
    }

    req.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::missing_token(MISSING_TOKEN_MESSAGE))
    }
}
