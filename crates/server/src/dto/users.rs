//! User listing/profile response types.

use serde::{Deserialize, Serialize};

/// A single user in listings and profile lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Account creation timestamp (RFC 3339)
    pub created_at: String,
}

impl From<entity::users::Model> for UserResponse {
    fn from(user: entity::users::Model) -> Self {
        Self {
            id: user.user_id,
            name: user.name,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Response for the user listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    /// Indicates operation success
    pub success: bool,
    /// All registered users
    pub users: Vec<UserResponse>,
}
