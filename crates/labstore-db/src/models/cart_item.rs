//! Cart line item model.

use crate::models::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A line in a shopping cart. One line per (cart, product) pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CartItem {
    /// Unique identifier.
    pub id: Uuid,

    /// Owning cart.
    pub cart_id: Uuid,

    /// Referenced product.
    pub product_id: Uuid,

    /// Requested quantity, at least 1.
    pub quantity: i32,

    /// When the line was created.
    pub created_at: DateTime<Utc>,

    /// When the line was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A cart line joined with its product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CartItemWithProduct {
    /// The cart line.
    #[serde(flatten)]
    pub item: CartItem,

    /// The product the line refers to.
    pub product: Product,
}

impl CartItem {
    /// Find a cart line by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM cart_items
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find the line for a product in a cart, if any.
    pub async fn find_by_cart_and_product(
        pool: &sqlx::PgPool,
        cart_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM cart_items
            WHERE cart_id = $1 AND product_id = $2
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .fetch_optional(pool)
        .await
    }

    /// List lines of a cart, oldest first.
    pub async fn list_by_cart(
        pool: &sqlx::PgPool,
        cart_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM cart_items
            WHERE cart_id = $1
            ORDER BY created_at
            ",
        )
        .bind(cart_id)
        .fetch_all(pool)
        .await
    }

    /// Create a new cart line.
    pub async fn create(
        pool: &sqlx::PgPool,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO cart_items (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(pool)
        .await
    }

    /// Set the absolute quantity of a line.
    pub async fn update_quantity(
        pool: &sqlx::PgPool,
        id: Uuid,
        quantity: i32,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            UPDATE cart_items
            SET quantity = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(pool)
        .await
    }

    /// Delete a cart line. Returns whether a row was removed.
    pub async fn delete(pool: &sqlx::PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_items
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every line of a cart. Returns the number of removed rows.
    pub async fn delete_all_for_cart<'e, E>(executor: E, cart_id: Uuid) -> Result<u64, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let result = sqlx::query(
            r"
            DELETE FROM cart_items
            WHERE cart_id = $1
            ",
        )
        .bind(cart_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cart_item_serialization() {
        let item = CartItem {
            id: Uuid::new_v4(),
            cart_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            quantity: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"quantity\":2"));
    }

    #[test]
    fn test_cart_item_with_product_flattens() {
        let item = CartItem {
            id: Uuid::new_v4(),
            cart_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            quantity: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let product = Product {
            id: item.product_id,
            name: "Pipette".to_string(),
            description: "Graduated, 10ml".to_string(),
            price: dec!(3.20),
            image: "/images/pipette.jpg".to_string(),
            category_id: Uuid::new_v4(),
            featured: false,
            rating: dec!(0),
            stock: 10,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let with_product = CartItemWithProduct { item, product };
        let json = serde_json::to_value(&with_product).unwrap();

        // Flattened line fields sit beside the nested product object
        assert!(json.get("quantity").is_some());
        assert!(json.get("product").is_some());
    }
}
