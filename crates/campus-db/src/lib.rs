//! # Campus DB
//!
//! PostgreSQL connection pool and schema migrations for the Campus API.
//!
//! # Example
//!
//! ```ignore
//! use campus_db::{MIGRATOR, init_db_pool};
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     MIGRATOR.run(&pool).await.expect("migrations failed");
//! }
//! ```

use std::env;

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;

/// Schema for `usuario`, `carrera`, `materia` and `alumno`.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Initializes a PostgreSQL connection pool.
///
/// Reads `DATABASE_URL` and, optionally, `DATABASE_MAX_CONNECTIONS`. The
/// returned pool is cheaply cloneable and is handed to the application state;
/// nothing holds it globally.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    tracing::info!(max_connections, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Applies pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
