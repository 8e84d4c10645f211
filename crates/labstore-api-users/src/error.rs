//! Error types for the user administration API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Error type for user administration endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiUsersError {
    /// User not found.
    #[error("User not found")]
    NotFound,

    /// Email already registered.
    #[error("User already exists")]
    AlreadyExists,

    /// Validation error (missing or invalid fields).
    #[error("{0}")]
    Validation(String),

    /// Authentication or role failure.
    #[error("Unauthorized")]
    Unauthorized,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error (e.g. password hashing failure).
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiUsersError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiUsersError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiUsersError::AlreadyExists | ApiUsersError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiUsersError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiUsersError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiUsersError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
