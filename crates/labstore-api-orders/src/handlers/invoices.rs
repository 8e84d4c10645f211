//! Invoice endpoint handlers.

use crate::error::ApiOrdersError;
use crate::models::InvoiceResponse;
use crate::services::OrderService;
use axum::{extract::Path, Extension, Json};
use labstore_auth::JwtClaims;
use labstore_core::UserId;
use labstore_db::Invoice;
use std::sync::Arc;
use uuid::Uuid;

fn caller_id(claims: &JwtClaims) -> Result<UserId, ApiOrdersError> {
    claims.user_id().ok_or(ApiOrdersError::Unauthorized)
}

/// Gets an invoice with its order. Owner or admin only.
#[utoipa::path(
    get,
    path = "/invoices/{id}",
    params(("id" = Uuid, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice details", body = InvoiceResponse),
        (status = 401, description = "Invoice belongs to another user"),
        (status = 404, description = "Invoice not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Invoices"
)]
pub async fn get_invoice_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<OrderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>, ApiOrdersError> {
    let user_id = caller_id(&claims)?;
    let invoice = service.get_invoice(user_id, claims.is_admin(), id).await?;
    Ok(Json(invoice))
}

/// Marks an invoice paid. Owner or admin only; rejects double payment.
///
/// Stamps the invoice's paid date and sets the parent order's payment status
/// to `PAID` in one transaction.
#[utoipa::path(
    put,
    path = "/invoices/{id}/pay",
    params(("id" = Uuid, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice paid", body = Invoice),
        (status = 400, description = "Invoice is already paid"),
        (status = 401, description = "Invoice belongs to another user"),
        (status = 404, description = "Invoice not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Invoices"
)]
pub async fn pay_invoice_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<OrderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Invoice>, ApiOrdersError> {
    let user_id = caller_id(&claims)?;
    let invoice = service.pay_invoice(user_id, claims.is_admin(), id).await?;
    Ok(Json(invoice))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup with database
    // See crates/labstore-api-orders/tests/invoice_tests.rs
}
