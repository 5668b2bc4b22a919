use sqlx::PgPool;
use tracing::instrument;

use campus_auth::issue_token;
use campus_config::JwtConfig;
use campus_core::{AppError, hash_password, verify_password};

use super::model::{Account, LoginRequest, RegisterRequest};

pub const DUPLICATE_USERNAME_MESSAGE: &str = "El usuario ya existe";
pub const UNKNOWN_USER_MESSAGE: &str = "Usuario incorrecto";
pub const BAD_PASSWORD_MESSAGE: &str = "Password incorrecto";

pub struct AuthService;

impl AuthService {
    /// Creates an account and returns its id. No token is issued.
    #[instrument(skip(db, dto), fields(usuario = %dto.usuario))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequest) -> Result<i32, AppError> {
        let hashed_password = hash_password(&dto.clave)?;

        let mut tx = db.begin().await?;

        let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM usuario WHERE usuario = $1")
            .bind(&dto.usuario)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            return Err(AppError::duplicate_username(DUPLICATE_USERNAME_MESSAGE));
        }

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO usuario (usuario, clave, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&dto.usuario)
        .bind(&hashed_password)
        .bind(&dto.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::duplicate_username(DUPLICATE_USERNAME_MESSAGE);
            }
            AppError::from(e)
        })?;

        tx.commit().await?;

        Ok(id)
    }

    /// Checks credentials and issues a session token.
    #[instrument(skip(db, dto, jwt_config), fields(usuario = %dto.usuario))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, usuario, clave, email FROM usuario WHERE usuario = $1",
        )
        .bind(&dto.usuario)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::user_not_found(UNKNOWN_USER_MESSAGE))?;

        if !verify_password(&dto.clave, &account.clave)? {
            return Err(AppError::bad_password(BAD_PASSWORD_MESSAGE));
        }

        issue_token(account.id, &account.usuario, &account.email, jwt_config)
    }
}
