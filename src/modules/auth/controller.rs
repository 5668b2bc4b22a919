use axum::Json;
use axum::extract::State;
use tracing::{Instrument, instrument};

use campus_core::AppError;

use super::model::{ErrorResponse, LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::tracing::record_auth_result;
use crate::validator::ValidatedJson;
use crate::{audit_event, auth_span, security_event};

/// Register a new account
#[utoipa::path(
    post,
    path = "/registro",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account registered", body = MessageResponse),
        (status = 400, description = "Missing data or username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let usuario = dto.usuario.clone();
    let id = AuthService::register_user(&state.db, dto).await?;

    audit_event!("create", "usuario", id = id, usuario = %usuario);

    Ok(Json(MessageResponse {
        message: "Se registro correctamente".to_string(),
    }))
}

/// Log in and receive a session token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Missing data", body = ErrorResponse),
        (status = 404, description = "Unknown user or wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let span = auth_span!("login", user.name = %dto.usuario);

    async move {
        let usuario = dto.usuario.clone();
        let result = AuthService::login_user(&state.db, dto, &state.jwt_config).await;
        record_auth_result(result.is_ok());

        match result {
            Ok(token) => Ok(Json(TokenResponse { token })),
            Err(e) => {
                security_event!("auth.login_failed", usuario = %usuario, kind = %e.kind);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}
