//! Product endpoint handlers.

use crate::error::ApiCatalogError;
use crate::handlers::require_admin;
use crate::models::{
    CreateProductRequest, DeletedResponse, ListProductsQuery, ProductResponse,
    UpdateProductRequest,
};
use crate::services::ProductService;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use labstore_auth::JwtClaims;
use labstore_db::Product;
use std::sync::Arc;
use uuid::Uuid;

/// Lists products, optionally filtered by category or featured flag.
#[utoipa::path(
    get,
    path = "/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Matching products", body = [ProductResponse]),
    ),
    tag = "Products"
)]
pub async fn list_products_handler(
    Extension(service): Extension<Arc<ProductService>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiCatalogError> {
    let products = service.list(&query).await?;
    Ok(Json(products))
}

/// Gets a product with its category.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product_handler(
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiCatalogError> {
    let product = service.get(id).await?;
    Ok(Json(product))
}

/// Creates a new product (admin only).
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Missing required fields or unknown category"),
        (status = 401, description = "Admin role required"),
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn create_product_handler(
    claims: Option<Extension<JwtClaims>>,
    Extension(service): Extension<Arc<ProductService>>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiCatalogError> {
    let claims = require_admin(claims.as_deref())?;

    tracing::info!(admin_id = %claims.sub, "Creating product");

    let product = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Updates a product (admin only).
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn update_product_handler(
    claims: Option<Extension<JwtClaims>>,
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<Product>, ApiCatalogError> {
    require_admin(claims.as_deref())?;

    let product = service.update(id, request).await?;
    Ok(Json(product))
}

/// Deletes a product (admin only).
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = DeletedResponse),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn delete_product_handler(
    claims: Option<Extension<JwtClaims>>,
    Extension(service): Extension<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiCatalogError> {
    require_admin(claims.as_deref())?;

    service.delete(id).await?;
    Ok(Json(DeletedResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
