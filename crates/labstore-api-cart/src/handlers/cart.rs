//! Cart endpoint handlers.
//!
//! All endpoints operate on the authenticated caller's cart; the router's
//! auth guard rejects anonymous requests before they reach these handlers.

use crate::error::ApiCartError;
use crate::models::{AddCartItemRequest, CartResponse, RemovedResponse, UpdateCartItemRequest};
use crate::services::CartService;
use axum::{extract::Path, Extension, Json};
use labstore_auth::JwtClaims;
use labstore_core::UserId;
use labstore_db::CartItemWithProduct;
use std::sync::Arc;
use uuid::Uuid;

fn caller_id(claims: &JwtClaims) -> Result<UserId, ApiCartError> {
    claims.user_id().ok_or(ApiCartError::Unauthorized)
}

/// Gets the caller's cart, creating an empty one on first access.
#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "The caller's cart", body = CartResponse),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Cart"
)]
pub async fn get_cart_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<CartService>>,
) -> Result<Json<CartResponse>, ApiCartError> {
    let user_id = caller_id(&claims)?;
    let cart = service.get_cart(user_id).await?;
    Ok(Json(cart))
}

/// Adds a product to the caller's cart.
#[utoipa::path(
    post,
    path = "/cart",
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Cart line created or incremented", body = CartItemWithProduct),
        (status = 400, description = "Invalid quantity or not enough stock"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Cart"
)]
pub async fn add_item_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<CartService>>,
    Json(request): Json<AddCartItemRequest>,
) -> Result<Json<CartItemWithProduct>, ApiCartError> {
    let user_id = caller_id(&claims)?;
    let item = service.add_item(user_id, request).await?;
    Ok(Json(item))
}

/// Sets the absolute quantity of a cart line.
#[utoipa::path(
    put,
    path = "/cart/items/{id}",
    params(("id" = Uuid, Path, description = "Cart item ID")),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Cart line updated", body = CartItemWithProduct),
        (status = 400, description = "Invalid quantity or not enough stock"),
        (status = 401, description = "Line belongs to another user"),
        (status = 404, description = "Cart item not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Cart"
)]
pub async fn update_item_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<CartService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCartItemRequest>,
) -> Result<Json<CartItemWithProduct>, ApiCartError> {
    let user_id = caller_id(&claims)?;
    let item = service.update_item(user_id, id, request).await?;
    Ok(Json(item))
}

/// Removes a cart line.
#[utoipa::path(
    delete,
    path = "/cart/items/{id}",
    params(("id" = Uuid, Path, description = "Cart item ID")),
    responses(
        (status = 200, description = "Cart line removed", body = RemovedResponse),
        (status = 401, description = "Line belongs to another user"),
        (status = 404, description = "Cart item not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Cart"
)]
pub async fn remove_item_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<CartService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RemovedResponse>, ApiCartError> {
    let user_id = caller_id(&claims)?;
    service.remove_item(user_id, id).await?;
    Ok(Json(RemovedResponse { success: true }))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup with database
    // See crates/labstore-api-cart/tests/cart_tests.rs
}
