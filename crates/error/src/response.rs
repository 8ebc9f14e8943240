//! HTTP error responses.
//!
//! Every `AppError` renders as `{"success": false, "code": ..., "message": ...}`.
//! Server-side failures (500) are logged in full and redacted on the wire;
//! 401 responses carry a `WWW-Authenticate: Bearer` challenge.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// JSON body for error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always false
    pub success: bool,

    /// Stable machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            success: false,
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.is_server_error() {
            tracing::error!(code = self.code(), error = %self.message(), "Request failed");
            "Internal server error".to_string()
        }
        else {
            self.message().to_string()
        };

        let body = Json(ErrorBody::new(self.code(), &message));

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        }
        else {
            (status, body).into_response()
        }
    }
}
