//! Cart API router configuration.
//!
//! Configures routes for cart endpoints:
//! - GET /cart - Get the caller's cart (lazily created)
//! - POST /cart - Add a product to the cart
//! - PUT /cart/items/:id - Set a line's quantity
//! - DELETE /cart/items/:id - Remove a line
//!
//! All endpoints require authentication.

use crate::handlers::{
    add_item_handler, get_cart_handler, remove_item_handler, update_item_handler,
};
use crate::services::CartService;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use labstore_auth::auth_guard;
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for cart routes.
#[derive(Clone)]
pub struct CartState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Cart service.
    pub cart_service: Arc<CartService>,
}

impl CartState {
    /// Create a new cart state.
    pub fn new(pool: PgPool) -> Self {
        let cart_service = Arc::new(CartService::new(pool.clone()));
        Self { pool, cart_service }
    }
}

/// Create the cart router with all endpoints.
pub fn cart_router(state: CartState) -> Router {
    Router::new()
        .route("/cart", get(get_cart_handler))
        .route("/cart", post(add_item_handler))
        .route("/cart/items/:id", put(update_item_handler))
        .route("/cart/items/:id", delete(remove_item_handler))
        .layer(middleware::from_fn(auth_guard))
        .layer(axum::Extension(state.cart_service))
        .layer(axum::Extension(state.pool))
}

#[cfg(test)]
mod tests {
    // Router tests require database setup; see tests/cart_tests.rs
}
