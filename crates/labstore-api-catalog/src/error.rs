//! Error types for the catalog API.

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

/// Error type for catalog endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiCatalogError {
    /// Category not found.
    #[error("Category not found")]
    CategoryNotFound,

    /// Product not found.
    #[error("Product not found")]
    ProductNotFound,

    /// Category still has products referencing it.
    #[error("Cannot delete category with associated products. Remove products first.")]
    CategoryHasProducts,

    /// Validation error (missing or invalid fields).
    #[error("{0}")]
    Validation(String),

    /// Authentication or role failure.
    #[error("Unauthorized")]
    Unauthorized,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiCatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiCatalogError::CategoryNotFound | ApiCatalogError::ProductNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiCatalogError::CategoryHasProducts | ApiCatalogError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiCatalogError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiCatalogError::Database(e) => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiCatalogError::CategoryNotFound.to_string(),
            "Category not found"
        );
        assert_eq!(
            ApiCatalogError::Validation("Missing required fields".to_string()).to_string(),
            "Missing required fields"
        );
    }

    #[test]
    fn test_category_has_products_message() {
        let msg = ApiCatalogError::CategoryHasProducts.to_string();
        assert!(msg.contains("associated products"));
    }
}
