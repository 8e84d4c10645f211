//! Catalog API router configuration.
//!
//! Configures routes for catalog endpoints:
//! - GET /categories - List categories (public)
//! - POST /categories - Create a category (admin)
//! - GET /categories/:id - Get category with products (public)
//! - PUT /categories/:id - Update category (admin)
//! - DELETE /categories/:id - Delete category (admin, blocked while products exist)
//! - GET /products - List products (public, filterable)
//! - POST /products - Create a product (admin)
//! - GET /products/:id - Get product (public)
//! - PUT /products/:id - Update product (admin)
//! - DELETE /products/:id - Delete product (admin)

use crate::handlers::{
    create_category_handler, create_product_handler, delete_category_handler,
    delete_product_handler, get_category_handler, get_product_handler, list_categories_handler,
    list_products_handler, update_category_handler, update_product_handler,
};
use crate::services::{CategoryService, ProductService};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for catalog routes.
#[derive(Clone)]
pub struct CatalogState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Category service for CRUD operations.
    pub category_service: Arc<CategoryService>,
    /// Product service for CRUD operations.
    pub product_service: Arc<ProductService>,
}

impl CatalogState {
    /// Create a new catalog state.
    pub fn new(pool: PgPool) -> Self {
        let category_service = Arc::new(CategoryService::new(pool.clone()));
        let product_service = Arc::new(ProductService::new(pool.clone()));
        Self {
            pool,
            category_service,
            product_service,
        }
    }
}

/// Create the catalog router with all endpoints.
///
/// Read endpoints are public; mutating handlers enforce the admin role
/// themselves because public and admin methods share paths.
pub fn catalog_router(state: CatalogState) -> Router {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route("/categories", post(create_category_handler))
        .route("/categories/:id", get(get_category_handler))
        .route("/categories/:id", put(update_category_handler))
        .route("/categories/:id", delete(delete_category_handler))
        .route("/products", get(list_products_handler))
        .route("/products", post(create_product_handler))
        .route("/products/:id", get(get_product_handler))
        .route("/products/:id", put(update_product_handler))
        .route("/products/:id", delete(delete_product_handler))
        .layer(axum::Extension(state.category_service))
        .layer(axum::Extension(state.product_service))
        .layer(axum::Extension(state.pool))
}
