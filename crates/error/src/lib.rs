//! # Warren Error Infrastructure
//!
//! The application error taxonomy and its mapping onto HTTP responses.
//!
//! Validation failures are user-correctable (400); authentication failures
//! are 401 with one deliberately generic message; authorization failures are
//! 403; store failures are 500 and never retried here. Configuration errors
//! are fatal at startup and should never reach a request path.

pub mod response;

pub use response::ErrorBody;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation: {message}")]
    Validation { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("NotFound: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Database: {message}")]
    Database { message: String },

    #[error("Config: {message}")]
    Config { message: String },

    #[error("Internal: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create an unauthorized error.
    #[inline]
    pub fn unauthorized(message: impl ToString) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    /// Create a forbidden error.
    #[inline]
    pub fn forbidden(message: impl ToString) -> Self {
        Self::Forbidden {
            message: message.to_string(),
        }
    }

    /// Create a not found error.
    #[inline]
    pub fn not_found(message: impl ToString) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    /// Create a conflict error.
    #[inline]
    pub fn conflict(message: impl ToString) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::Validation { .. } => http::StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => http::StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => http::StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => http::StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => http::StatusCode::CONFLICT,
            AppError::Database { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::Unauthorized { .. } => "UNAUTHORIZED",
            AppError::Forbidden { .. } => "FORBIDDEN",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Conflict { .. } => "CONFLICT",
            AppError::Database { .. } => "DATABASE_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Database { message }
            | AppError::Config { message }
            | AppError::Internal { message } => message,
        }
    }

    /// True for errors whose message must not leak to clients.
    pub fn is_server_error(&self) -> bool {
        self.status() == http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Convert Sea-ORM database errors to AppError. The store is a remote
/// collaborator: its failures surface as server errors, logged, not retried.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::validation("Password too weak");
        assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let err = AppError::unauthorized("Invalid name or password");
        assert_eq!(err.status(), http::StatusCode::UNAUTHORIZED);
        assert_eq!(err.code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let err = AppError::forbidden("Not the owner");
        assert_eq!(err.status(), http::StatusCode::FORBIDDEN);
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::not_found("User not found");
        assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err = AppError::conflict("Name already taken");
        assert_eq!(err.status(), http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        for err in [
            AppError::database("connection refused"),
            AppError::config("missing secret"),
            AppError::internal("bug"),
        ] {
            assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
            assert!(err.is_server_error());
        }
    }

    #[test]
    fn test_from_db_err() {
        let err: AppError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: AppError = anyhow::anyhow!("wrapped").into();
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_message_accessor() {
        let err = AppError::not_found("User 7 not found");
        assert_eq!(err.message(), "User 7 not found");
    }
}
