use sqlx::PgPool;

use campus_config::{CompatConfig, CorsConfig, JwtConfig};
use campus_db::init_db_pool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub compat: CompatConfig,
}

impl AppState {
    /// Builds state around an existing pool, reading the rest from the environment.
    pub fn with_pool(db: PgPool) -> Self {
        Self {
            db,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            compat: CompatConfig::from_env(),
        }
    }
}

pub async fn init_app_state() -> AppState {
    AppState::with_pool(init_db_pool().await)
}
