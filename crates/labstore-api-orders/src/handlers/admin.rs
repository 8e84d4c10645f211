//! Admin order management handlers.
//!
//! The router applies the admin guard; these handlers assume an admin caller.

use crate::error::ApiOrdersError;
use crate::models::{OrderResponse, UpdateOrderStatusRequest};
use crate::services::OrderService;
use axum::{extract::Path, Extension, Json};
use labstore_auth::JwtClaims;
use std::sync::Arc;
use uuid::Uuid;

/// Lists every order with purchaser summaries (admin only).
#[utoipa::path(
    get,
    path = "/admin/orders",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
        (status = 401, description = "Admin role required"),
    ),
    security(("bearerAuth" = [])),
    tag = "Admin Orders"
)]
pub async fn admin_list_orders_handler(
    Extension(service): Extension<Arc<OrderService>>,
) -> Result<Json<Vec<OrderResponse>>, ApiOrdersError> {
    let orders = service.admin_list().await?;
    Ok(Json(orders))
}

/// Gets a single order with purchaser summary (admin only).
#[utoipa::path(
    get,
    path = "/admin/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Order not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Admin Orders"
)]
pub async fn admin_get_order_handler(
    Extension(service): Extension<Arc<OrderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiOrdersError> {
    let order = service.admin_get(id).await?;
    Ok(Json(order))
}

/// Updates an order's status and/or payment status (admin only).
///
/// Status changes are constrained to the legal transition graph. Setting the
/// payment status to `PAID` also stamps the invoice's paid date.
#[utoipa::path(
    patch,
    path = "/admin/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Invalid value or illegal transition"),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Order not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Admin Orders"
)]
pub async fn admin_update_order_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<OrderService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, ApiOrdersError> {
    tracing::info!(admin_id = %claims.sub, order_id = %id, "Admin order update");

    let order = service.admin_update(id, &request).await?;
    Ok(Json(order))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup with database
    // See crates/labstore-api-orders/tests/admin_order_tests.rs
}
