//! Orders API router configuration.
//!
//! Configures routes for order, invoice and admin order endpoints:
//! - GET /orders - List the caller's orders
//! - POST /orders - Checkout (create order from cart)
//! - GET /orders/:id - Get an order (owner or admin)
//! - GET /invoices/:id - Get an invoice (owner or admin)
//! - PUT /invoices/:id/pay - Mark an invoice paid (owner or admin)
//! - GET /admin/orders - List all orders (admin)
//! - GET /admin/orders/:id - Get any order (admin)
//! - PATCH /admin/orders/:id - Update status/payment status (admin)

use crate::handlers::{
    admin_get_order_handler, admin_list_orders_handler, admin_update_order_handler,
    checkout_handler, get_invoice_handler, get_order_handler, list_orders_handler,
    pay_invoice_handler,
};
use crate::services::OrderService;
use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use labstore_auth::{admin_guard, auth_guard};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for order routes.
#[derive(Clone)]
pub struct OrdersState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Order service for checkout and order management.
    pub order_service: Arc<OrderService>,
}

impl OrdersState {
    /// Create a new orders state.
    pub fn new(pool: PgPool) -> Self {
        let order_service = Arc::new(OrderService::new(pool.clone()));
        Self {
            pool,
            order_service,
        }
    }
}

/// Create the orders router (authenticated user endpoints).
pub fn orders_router(state: OrdersState) -> Router {
    Router::new()
        .route("/orders", get(list_orders_handler))
        .route("/orders", post(checkout_handler))
        .route("/orders/:id", get(get_order_handler))
        .route("/invoices/:id", get(get_invoice_handler))
        .route("/invoices/:id/pay", put(pay_invoice_handler))
        .layer(middleware::from_fn(auth_guard))
        .layer(axum::Extension(state.order_service.clone()))
        .layer(axum::Extension(state.pool.clone()))
}

/// Create the admin orders router. All endpoints require the admin role.
pub fn admin_orders_router(state: OrdersState) -> Router {
    Router::new()
        .route("/admin/orders", get(admin_list_orders_handler))
        .route("/admin/orders/:id", get(admin_get_order_handler))
        .route("/admin/orders/:id", patch(admin_update_order_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(axum::Extension(state.order_service))
        .layer(axum::Extension(state.pool))
}
