use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::info;

use campus::logging::init_tracing;
use campus::modules::auth::service::AuthService;
use campus::router::init_router;
use campus::state::init_app_state;
use campus::validator::validate_payload;
use campus_config::ServerConfig;
use campus_models::accounts::RegisterRequest;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Campus API - academic records server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations and start the HTTP server (default)
    Serve {
        /// Port to listen on, overriding PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Register an account without going through the API
    CreateAccount {
        usuario: String,
        clave: String,
        email: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let _guards = init_tracing();

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => serve(port).await,
        Commands::CreateAccount {
            usuario,
            clave,
            email,
        } => create_account(usuario, clave, email).await,
    }
}

async fn serve(port: Option<u16>) -> anyhow::Result<()> {
    let mut server_config = ServerConfig::from_env();
    if let Some(port) = port {
        server_config.port = port;
    }

    let state = init_app_state().await;
    campus_db::run_migrations(&state.db)
        .await
        .context("Failed to run migrations")?;

    let app = init_router(state);

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(addr = %addr, "Server running");
    info!("Swagger UI available at http://{addr}/swagger-ui");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn create_account(usuario: String, clave: String, email: String) -> anyhow::Result<()> {
    let dto = RegisterRequest {
        usuario,
        clave,
        email,
    };
    validate_payload(&dto).map_err(|e| anyhow::anyhow!(e.client_message()))?;

    let state = init_app_state().await;
    campus_db::run_migrations(&state.db)
        .await
        .context("Failed to run migrations")?;

    let usuario = dto.usuario.clone();
    let id = AuthService::register_user(&state.db, dto)
        .await
        .map_err(|e| anyhow::anyhow!(e.client_message()))?;

    info!(user_id = id, usuario = %usuario, "Account created");

    Ok(())
}
