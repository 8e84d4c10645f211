//! Order model and status enums.
//!
//! Orders are immutable snapshots of a completed checkout. Only `status` and
//! `payment_status` change after creation, and `status` only along the legal
//! transition graph enforced by [`OrderStatus::can_transition_to`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[sqlx(type_name = "order_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Order received, not yet processed.
    Pending,
    /// Order accepted and being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order received by the customer. Terminal.
    Delivered,
    /// Order cancelled. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Whether a transition from `self` to `next` is legal.
    ///
    /// The graph: `Pending -> {Processing, Cancelled}`,
    /// `Processing -> {Shipped, Cancelled}`, `Shipped -> {Delivered}`.
    /// `Delivered` and `Cancelled` are terminal. A self-transition is always
    /// allowed (no-op).
    #[must_use]
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Processing)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Processing, OrderStatus::Shipped)
                | (OrderStatus::Processing, OrderStatus::Cancelled)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }

    /// Whether this status accepts no further transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[sqlx(type_name = "payment_method", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Paypal,
    CashOnDelivery,
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[sqlx(type_name = "payment_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Awaiting payment.
    Pending,
    /// Payment received.
    Paid,
    /// Payment attempt failed.
    Failed,
    /// Payment returned to the customer.
    Refunded,
}

/// A completed purchase.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    /// Unique identifier.
    pub id: Uuid,

    /// Purchasing user.
    pub user_id: Uuid,

    /// Sum of line price x quantity, snapshotted at checkout.
    pub total_amount: Decimal,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// Shipping address as entered at checkout.
    pub shipping_address: String,

    /// Selected payment method.
    pub payment_method: PaymentMethod,

    /// Payment state.
    pub payment_status: PaymentStatus,

    /// When the order was created.
    pub created_at: DateTime<Utc>,

    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Find an order by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List a user's orders, newest first.
    pub async fn list_by_user(
        pool: &sqlx::PgPool,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// List every order, newest first.
    pub async fn list_all(pool: &sqlx::PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM orders
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(pool)
        .await
    }

    /// Update status and/or payment status. `None` fields are left untouched.
    ///
    /// Transition legality is the caller's responsibility; this method only
    /// writes.
    pub async fn update_status<'e, E>(
        executor: E,
        id: Uuid,
        status: Option<OrderStatus>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let mut updates = vec!["updated_at = NOW()".to_string()];
        let mut param_idx = 2;

        if status.is_some() {
            updates.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if payment_status.is_some() {
            updates.push(format!("payment_status = ${param_idx}"));
        }

        let query = format!(
            "UPDATE orders SET {} WHERE id = $1 RETURNING *",
            updates.join(", ")
        );

        let mut q = sqlx::query_as::<_, Order>(&query).bind(id);

        if let Some(status) = status {
            q = q.bind(status);
        }
        if let Some(payment_status) = payment_status {
            q = q.bind(payment_status);
        }

        q.fetch_optional(executor).await
    }

    /// Set the payment status inside a transaction.
    pub async fn set_payment_status<'e, E>(
        executor: E,
        id: Uuid,
        payment_status: PaymentStatus,
    ) -> Result<(), sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query(
            r"
            UPDATE orders
            SET payment_status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(payment_status)
        .execute(executor)
        .await?;

        Ok(())
    }
}
