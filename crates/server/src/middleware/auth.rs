//! # Authentication Middleware
//!
//! Gates protected endpoints behind bearer-token verification.
//!
//! A request without any credential is rejected before signature
//! verification is attempted. A request with a credential that fails any
//! check (signature, expiry, structure) gets one generic rejection; the
//! middleware never reveals which check failed.

use auth::jwt::{extract_bearer_token, validate_token};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use error::AppError;

use crate::AppState;

/// Identity decoded from a valid token, valid for one request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID (`users.user_id`)
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Authentication middleware.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates signature and expiration
/// 3. Adds [`CurrentUser`] to request extensions
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing credentials"))?;

    let token = extract_bearer_token(auth_header)
        .ok_or_else(|| AppError::unauthorized("Missing credentials"))?;

    let claims = validate_token(&state.jwt_config, &token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(CurrentUser {
        id: claims.id,
        name: claims.name,
    });

    Ok(next.run(request).await)
}
