//! Order line item model.
//!
//! Order items are created once at checkout with the product price
//! snapshotted, and never mutated afterwards.

use crate::models::Product;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A line of an order.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderItem {
    /// Unique identifier.
    pub id: Uuid,

    /// Owning order.
    pub order_id: Uuid,

    /// Purchased product.
    pub product_id: Uuid,

    /// Purchased quantity.
    pub quantity: i32,

    /// Unit price at the time of purchase, independent of later price changes.
    pub price: Decimal,

    /// When the line was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating an order line inside the checkout transaction.
#[derive(Debug, Clone)]
pub struct CreateOrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

/// An order line joined with its product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderItemWithProduct {
    /// The order line.
    #[serde(flatten)]
    pub item: OrderItem,

    /// The referenced product, as it currently exists.
    pub product: Option<Product>,
}

impl OrderItem {
    /// List lines of an order.
    pub async fn list_by_order(
        pool: &sqlx::PgPool,
        order_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM order_items
            WHERE order_id = $1
            ORDER BY created_at
            ",
        )
        .bind(order_id)
        .fetch_all(pool)
        .await
    }

    /// Insert an order line. Runs inside the checkout transaction.
    pub async fn insert<'e, E>(
        executor: E,
        order_id: Uuid,
        input: &CreateOrderItem,
    ) -> Result<Self, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            INSERT INTO order_items (order_id, product_id, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(order_id)
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.price)
        .fetch_one(executor)
        .await
    }

    /// Line subtotal: price x quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_subtotal() {
        let item = OrderItem {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            quantity: 3,
            price: dec!(10.00),
            created_at: Utc::now(),
        };

        assert_eq!(item.subtotal(), dec!(30.00));
    }

    #[test]
    fn test_order_item_serialization() {
        let item = OrderItem {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            quantity: 2,
            price: dec!(4.75),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("4.75"));
    }
}
