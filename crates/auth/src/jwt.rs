//! Bearer-token issuance and validation.
//!
//! Tokens are compact JWS strings (HS256) carrying the subject id, display
//! name, issuance time and expiration. They are stateless: nothing is stored
//! server-side, and validity is bounded by the configured lifetime.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime in seconds (one hour).
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encode(String),

    /// Bad signature, expired, or structurally malformed. Collapsed into a
    /// single variant so callers cannot tell which check failed.
    #[error("Invalid or expired token")]
    Invalid,
}

/// Signing configuration, built once at startup and injected.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric signing secret. Required; there is no default.
    pub secret: String,
    /// Token lifetime in seconds.
    pub ttl_seconds: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, ttl_seconds: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }
}

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (`users.user_id`)
    pub id: i64,
    /// Subject display name
    pub name: String,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

/// Issues a signed token for the given subject.
///
/// The expiration is issuance time plus the configured lifetime, so repeated
/// issuance for the same subject produces different tokens.
pub fn issue_token(config: &JwtConfig, id: i64, name: &str) -> Result<String, TokenError> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        id,
        name: name.to_string(),
        iat: now,
        exp: now + config.ttl_seconds as i64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encode(e.to_string()))
}

/// Validates a token's signature and expiration, returning its claims.
///
/// Every failure mode maps to [`TokenError::Invalid`]; expiry is checked
/// with zero leeway.
pub fn validate_token(config: &JwtConfig, token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| TokenError::Invalid)
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn extract_bearer_token(auth_header: &str) -> Option<String> {
    let token = auth_header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
