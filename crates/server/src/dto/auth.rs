//! Authentication request/response types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for user registration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name, unique across users
    #[validate(length(min = 1, max = 64, message = "Name must be between 1 and 64 characters"))]
    pub name: String,

    /// Plaintext password; checked against the complexity policy before any
    /// hashing or persistence
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for user login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Plaintext password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User identity as exposed to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique user identifier
    pub id: i64,

    /// Display name
    pub name: String,
}

/// Success response for registration and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccessResponse {
    /// Indicates operation success
    pub success: bool,

    /// Bearer token; present after login, absent after registration
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub token: Option<String>,

    /// The authenticated or newly registered user
    pub user: PublicUser,
}

/// Generic success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Indicates operation success
    pub success: bool,

    /// Human-readable message
    pub message: String,
}
