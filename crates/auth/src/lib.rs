//! # Authentication
//!
//! Credential and session authentication for the Warren API:
//! - Password hashing, verification and complexity policy
//! - Bearer-token (JWT) issuance and validation
//! - Ownership authorization for subject-scoped writes

pub mod jwt;
pub mod ownership;
pub mod password;

// Re-export commonly used types
pub use jwt::{extract_bearer_token, issue_token, validate_token, Claims, JwtConfig, TokenError};
pub use ownership::owns_resource;
pub use password::{hash_password, validate_password_policy, verify_password};
pub use secrecy;
