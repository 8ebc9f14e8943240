//! Server startup: connect, migrate, wire middleware, bind, serve.

use auth::JwtConfig;
use axum::middleware;
use error::{AppError, Result};
use migration::MigratorTrait;
use server::{create_app_router, middleware::cors::{cors_middleware, CorsConfig}, AppState};

use crate::config::parse_socket_addr;

/// Runs the API server until interrupted.
pub async fn run(host: &str, port: u16, database_url: &str, jwt_config: JwtConfig) -> Result<()> {
    logging::info!(target: "serve", host = %host, port = %port, "Starting API server...");

    let db = sea_orm::Database::connect(database_url)
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))?;

    logging::info!(target: "serve", "Running database migrations...");
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| AppError::database(format!("Migration failed: {}", e)))?;

    let state = AppState::new(db, jwt_config);
    let cors = CorsConfig::from_env();
    logging::info!(target: "serve", origins = ?cors.allowed_origins, "CORS configured");

    let app = create_app_router(state).layer(middleware::from_fn(move |req, next| {
        cors_middleware(req, next, cors.clone())
    }));

    let addr = parse_socket_addr(host, port)
        .map_err(|e| AppError::config(format!("Invalid bind address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {}: {}", addr, e)))?;

    logging::info!(target: "serve", addr = %addr, "Listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
