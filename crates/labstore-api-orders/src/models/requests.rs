//! Request models for the orders API.
//!
//! Enum-valued fields arrive as strings and are parsed explicitly so that an
//! unknown value answers 400 with a descriptive message rather than a
//! deserialization rejection.

use crate::error::ApiOrdersError;
use labstore_db::{OrderStatus, PaymentMethod, PaymentStatus};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request to create an order from the caller's cart.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Shipping address. Required.
    pub shipping_address: Option<String>,

    /// Payment method. Required; one of `CREDIT_CARD`, `BANK_TRANSFER`,
    /// `PAYPAL`, `CASH_ON_DELIVERY`.
    pub payment_method: Option<String>,
}

impl CheckoutRequest {
    /// Validate presence and parse the payment method.
    pub fn validated(&self) -> Result<(String, PaymentMethod), ApiOrdersError> {
        let (Some(address), Some(method)) = (&self.shipping_address, &self.payment_method) else {
            return Err(ApiOrdersError::Validation(
                "Missing required fields".to_string(),
            ));
        };
        if address.trim().is_empty() {
            return Err(ApiOrdersError::Validation(
                "Missing required fields".to_string(),
            ));
        }

        let method = parse_payment_method(method)?;
        Ok((address.clone(), method))
    }
}

/// Admin request to update an order's status and/or payment status.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// New fulfilment status.
    pub status: Option<String>,

    /// New payment status.
    pub payment_status: Option<String>,
}

impl UpdateOrderStatusRequest {
    /// Parse the supplied values against the fixed enums.
    ///
    /// Fails when neither field is supplied, or when a value is outside its
    /// enum.
    pub fn validated(
        &self,
    ) -> Result<(Option<OrderStatus>, Option<PaymentStatus>), ApiOrdersError> {
        if self.status.is_none() && self.payment_status.is_none() {
            return Err(ApiOrdersError::Validation(
                "No update data provided".to_string(),
            ));
        }

        let status = self.status.as_deref().map(parse_order_status).transpose()?;
        let payment_status = self
            .payment_status
            .as_deref()
            .map(parse_payment_status)
            .transpose()?;

        Ok((status, payment_status))
    }
}

fn parse_order_status(value: &str) -> Result<OrderStatus, ApiOrdersError> {
    match value {
        "PENDING" => Ok(OrderStatus::Pending),
        "PROCESSING" => Ok(OrderStatus::Processing),
        "SHIPPED" => Ok(OrderStatus::Shipped),
        "DELIVERED" => Ok(OrderStatus::Delivered),
        "CANCELLED" => Ok(OrderStatus::Cancelled),
        _ => Err(ApiOrdersError::Validation(
            "Invalid order status".to_string(),
        )),
    }
}

fn parse_payment_status(value: &str) -> Result<PaymentStatus, ApiOrdersError> {
    match value {
        "PENDING" => Ok(PaymentStatus::Pending),
        "PAID" => Ok(PaymentStatus::Paid),
        "FAILED" => Ok(PaymentStatus::Failed),
        "REFUNDED" => Ok(PaymentStatus::Refunded),
        _ => Err(ApiOrdersError::Validation(
            "Invalid payment status".to_string(),
        )),
    }
}

fn parse_payment_method(value: &str) -> Result<PaymentMethod, ApiOrdersError> {
    match value {
        "CREDIT_CARD" => Ok(PaymentMethod::CreditCard),
        "BANK_TRANSFER" => Ok(PaymentMethod::BankTransfer),
        "PAYPAL" => Ok(PaymentMethod::Paypal),
        "CASH_ON_DELIVERY" => Ok(PaymentMethod::CashOnDelivery),
        _ => Err(ApiOrdersError::Validation(
            "Invalid payment method".to_string(),
        )),
    }
}
