//! Shopping cart model.
//!
//! One cart per user, created lazily on first access. A cart persists
//! indefinitely; checkout clears its items but never deletes the cart row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A per-user shopping cart.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Cart {
    /// Unique identifier.
    pub id: Uuid,

    /// Owning user. Unique, enforcing one cart per user.
    pub user_id: Uuid,

    /// When the cart was created.
    pub created_at: DateTime<Utc>,

    /// When the cart was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Find the cart belonging to a user.
    pub async fn find_by_user(
        pool: &sqlx::PgPool,
        user_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM carts
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Get the user's cart, creating an empty one when none exists.
    pub async fn get_or_create(pool: &sqlx::PgPool, user_id: Uuid) -> Result<Self, sqlx::Error> {
        if let Some(cart) = Self::find_by_user(pool, user_id).await? {
            return Ok(cart);
        }

        // ON CONFLICT handles the raced first access: two concurrent requests
        // both miss the lookup, one insert wins, both return the same row.
        sqlx::query_as(
            r"
            INSERT INTO carts (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET updated_at = NOW()
            RETURNING *
            ",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Count items in this cart.
    pub async fn count_items(pool: &sqlx::PgPool, cart_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM cart_items
            WHERE cart_id = $1
            ",
        )
        .bind(cart_id)
        .fetch_one(pool)
        .await
    }

    /// Check if the cart is empty.
    pub async fn is_empty(pool: &sqlx::PgPool, cart_id: Uuid) -> Result<bool, sqlx::Error> {
        let count = Self::count_items(pool, cart_id).await?;
        Ok(count == 0)
    }

    /// Touch the cart (update timestamp).
    pub async fn touch(pool: &sqlx::PgPool, cart_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            r"
            UPDATE carts
            SET updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(cart_id)
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_serialization() {
        let cart = Cart {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.contains("user_id"));
    }
}
