//! Server error types with HTTP status code mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use georeg_core::RegistryError;
use serde::Serialize;
use thiserror::Error;

/// Server error type that wraps registry errors and provides HTTP
/// status mapping
#[derive(Error, Debug)]
pub enum ServerError {
    /// Registry layer error
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic bad request error
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ServerError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 - Not Found
            ServerError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,

            // 409 - Conflict
            ServerError::Registry(RegistryError::Conflict(_)) => StatusCode::CONFLICT,

            // 400 - Bad Request (client errors)
            ServerError::Registry(RegistryError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ServerError::Json(_) => StatusCode::BAD_REQUEST,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ServerError::BadRequest(msg.into())
    }
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// HTTP status code
    pub status: u16,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: self.to_string(),
            status: status.as_u16(),
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            format!(r#"{{"error":"{}","status":{}}}"#, self, status.as_u16())
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;
