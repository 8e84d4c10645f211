//! Order endpoint handlers.

use crate::error::ApiOrdersError;
use crate::models::{CheckoutRequest, OrderResponse};
use crate::services::OrderService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use labstore_auth::JwtClaims;
use labstore_core::UserId;
use std::sync::Arc;
use uuid::Uuid;

fn caller_id(claims: &JwtClaims) -> Result<UserId, ApiOrdersError> {
    claims.user_id().ok_or(ApiOrdersError::Unauthorized)
}

/// Lists the caller's orders, newest first.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "The caller's orders", body = [OrderResponse]),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Orders"
)]
pub async fn list_orders_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<OrderService>>,
) -> Result<Json<Vec<OrderResponse>>, ApiOrdersError> {
    let user_id = caller_id(&claims)?;
    let orders = service.list_for_user(user_id).await?;
    Ok(Json(orders))
}

/// Creates an order from the caller's cart.
///
/// Validates stock for every line, snapshots prices, generates an invoice due
/// in seven days, decrements stock and clears the cart atomically.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Empty cart, missing fields or insufficient stock"),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Orders"
)]
pub async fn checkout_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<OrderService>>,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiOrdersError> {
    let user_id = caller_id(&claims)?;

    tracing::info!(user_id = %user_id, "Checkout started");

    let order = service.checkout(user_id, &request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Gets one of the caller's orders (admins may fetch any order).
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 401, description = "Order belongs to another user"),
        (status = 404, description = "Order not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Orders"
)]
pub async fn get_order_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<OrderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiOrdersError> {
    let user_id = caller_id(&claims)?;
    let order = service.get_order(user_id, claims.is_admin(), id).await?;
    Ok(Json(order))
}
