//! # Common Test Utilities
//!
//! Shared test infrastructure: logging init, database setup with graceful
//! skip when no database is available, and request helpers.

use std::sync::Once;

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
};
use sea_orm::{Database, DbConn};

/// Secret used by every test; long enough for HS256.
pub const TEST_SECRET: &str = "warren-test-secret-at-least-32-bytes!!";

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Create a test database connection from the DATABASE_URL env var.
///
/// Returns `Err` when the variable is unset or the connection fails, so
/// callers can skip instead of failing on machines without a database.
pub async fn test_db() -> Result<DbConn, String> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL environment variable not set".to_string())?;

    Database::connect(&database_url)
        .await
        .map_err(|e| format!("Failed to connect to test database: {}", e))
}

/// Generate a unique user name so tests don't collide across runs
pub fn unique_name(prefix: &str) -> String {
    format!(
        "{}_{}",
        prefix,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    )
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a JSON request with a bearer token
pub fn authed_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a body-less request with a bearer token
pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
