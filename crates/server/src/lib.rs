//! # Warren API Server
//!
//! Axum-based HTTP API for the Warren browser game: registration, login and
//! game-score submission/retrieval.
//!
//! ## Modules
//!
//! - [`dto`]: Request/response data transfer objects
//! - [`handlers`]: Request handlers
//! - [`middleware`]: HTTP middleware (authentication, CORS)
//! - [`router`]: API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use router::create_app_router;

use auth::JwtConfig;

/// Application state shared across request handlers.
///
/// Built once in `main` and injected; there are no ambient globals.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: sea_orm::DbConn,
    /// JWT signing configuration
    pub jwt_config: JwtConfig,
}

impl AppState {
    #[must_use]
    pub fn new(db: sea_orm::DbConn, jwt_config: JwtConfig) -> Self {
        Self { db, jwt_config }
    }
}
