//! User administration router configuration.
//!
//! Configures routes for user administration endpoints:
//! - POST /users/register - Register a user
//! - GET /users - List users
//! - PUT /users/:id - Update user
//! - DELETE /users/:id - Delete user
//!
//! All endpoints require the admin role.

use crate::handlers::{
    delete_user_handler, list_users_handler, register_user_handler, update_user_handler,
};
use crate::services::UserService;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use labstore_auth::admin_guard;
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for user administration routes.
#[derive(Clone)]
pub struct UsersState {
    /// Database connection pool.
    pub pool: PgPool,
    /// User service for CRUD operations.
    pub user_service: Arc<UserService>,
}

impl UsersState {
    /// Create a new users state.
    pub fn new(pool: PgPool) -> Self {
        let user_service = Arc::new(UserService::new(pool.clone()));
        Self { pool, user_service }
    }
}

/// Create the user administration router with all endpoints.
pub fn users_router(state: UsersState) -> Router {
    Router::new()
        // Register MUST be before /:id-style captures added later
        .route("/users/register", post(register_user_handler))
        .route("/users", get(list_users_handler))
        .route("/users/:id", put(update_user_handler))
        .route("/users/:id", delete(delete_user_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(axum::Extension(state.user_service))
        .layer(axum::Extension(state.pool))
}
