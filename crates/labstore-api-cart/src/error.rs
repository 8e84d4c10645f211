//! Error types for the cart API.

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

/// Error type for cart endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiCartError {
    /// Product not found.
    #[error("Product not found")]
    ProductNotFound,

    /// Cart line not found.
    #[error("Cart item not found")]
    ItemNotFound,

    /// Requested quantity exceeds available stock.
    #[error("Not enough stock available")]
    InsufficientStock,

    /// Validation error (missing or invalid fields).
    #[error("{0}")]
    Validation(String),

    /// Authentication failure, or the cart line belongs to another user.
    #[error("Unauthorized")]
    Unauthorized,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiCartError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiCartError::ProductNotFound | ApiCartError::ItemNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiCartError::InsufficientStock | ApiCartError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiCartError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiCartError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
