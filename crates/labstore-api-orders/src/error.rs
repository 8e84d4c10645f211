//! Error types for the orders API.

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

/// Error type for order, invoice and admin order endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiOrdersError {
    /// Checkout on a missing or empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line exceeds the product's available stock.
    #[error("Not enough stock for {product_name}")]
    InsufficientStock {
        /// Name of the product that is short.
        product_name: String,
    },

    /// Order not found.
    #[error("Order not found")]
    OrderNotFound,

    /// Invoice not found.
    #[error("Invoice not found")]
    InvoiceNotFound,

    /// Paying an invoice that already has a paid date.
    #[error("Invoice is already paid")]
    AlreadyPaid,

    /// Status transition outside the legal state machine.
    #[error("Invalid status transition from {from} to {to}")]
    IllegalTransition {
        /// Current order status.
        from: String,
        /// Requested order status.
        to: String,
    },

    /// Validation error (missing fields, unknown enum value).
    #[error("{0}")]
    Validation(String),

    /// Authentication failure, or the resource belongs to another user.
    #[error("Unauthorized")]
    Unauthorized,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiOrdersError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiOrdersError::EmptyCart
            | ApiOrdersError::InsufficientStock { .. }
            | ApiOrdersError::AlreadyPaid
            | ApiOrdersError::IllegalTransition { .. }
            | ApiOrdersError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiOrdersError::OrderNotFound | ApiOrdersError::InvoiceNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiOrdersError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiOrdersError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiOrdersError::Internal(msg) => {
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
