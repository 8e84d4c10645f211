//! Category endpoint handlers.

use crate::error::ApiCatalogError;
use crate::handlers::require_admin;
use crate::models::{
    CategoryDetailResponse, CategoryListEntry, CreateCategoryRequest, DeletedResponse,
    UpdateCategoryRequest,
};
use crate::services::CategoryService;
use axum::{
    extract::Path,
    http::StatusCode,
    Extension, Json,
};
use labstore_auth::JwtClaims;
use labstore_db::Category;
use std::sync::Arc;
use uuid::Uuid;

/// Lists all categories with product counts.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = [CategoryListEntry]),
    ),
    tag = "Categories"
)]
pub async fn list_categories_handler(
    Extension(service): Extension<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryListEntry>>, ApiCatalogError> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Gets a category with its products.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryDetailResponse),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn get_category_handler(
    Extension(service): Extension<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryDetailResponse>, ApiCatalogError> {
    let category = service.get(id).await?;
    Ok(Json(category))
}

/// Creates a new category (admin only).
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Admin role required"),
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category_handler(
    claims: Option<Extension<JwtClaims>>,
    Extension(service): Extension<Arc<CategoryService>>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiCatalogError> {
    let claims = require_admin(claims.as_deref())?;

    tracing::info!(admin_id = %claims.sub, "Creating category");

    let category = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Updates a category (admin only).
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Category not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn update_category_handler(
    claims: Option<Extension<JwtClaims>>,
    Extension(service): Extension<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, ApiCatalogError> {
    require_admin(claims.as_deref())?;

    let category = service.update(id, request).await?;
    Ok(Json(category))
}

/// Deletes a category (admin only). Fails while products reference it.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = DeletedResponse),
        (status = 400, description = "Category has associated products"),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Category not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn delete_category_handler(
    claims: Option<Extension<JwtClaims>>,
    Extension(service): Extension<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiCatalogError> {
    require_admin(claims.as_deref())?;

    service.delete(id).await?;
    Ok(Json(DeletedResponse {
        message: "Category deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup with database
    // See crates/labstore-api-catalog/tests/catalog_tests.rs
}
