//! Product model.
//!
//! Products carry a live inventory count (`stock`). Stock is only mutated at
//! order creation, through the conditional [`Product::decrement_stock`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product in the catalog.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Unique identifier.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Product description.
    pub description: String,

    /// Unit price.
    pub price: Decimal,

    /// Image URL or path.
    pub image: String,

    /// Owning category.
    pub category_id: Uuid,

    /// Whether the product is featured on the storefront.
    pub featured: bool,

    /// Average rating, 0.00 to 5.00.
    pub rating: Decimal,

    /// Units in stock. Never negative.
    pub stock: i32,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category_id: Uuid,
    pub featured: bool,
    pub rating: Decimal,
    pub stock: i32,
}

/// Input for updating a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category_id: Option<Uuid>,
    pub featured: Option<bool>,
    pub rating: Option<Decimal>,
    pub stock: Option<i32>,
}

/// Filter options for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Filter by category.
    pub category_id: Option<Uuid>,

    /// Filter by featured flag.
    pub featured: Option<bool>,
}

impl Product {
    /// Find a product by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List products with optional filtering, ordered by name.
    pub async fn list(
        pool: &sqlx::PgPool,
        filter: &ProductFilter,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut query = String::from(
            r"
            SELECT * FROM products
            WHERE true
            ",
        );
        let mut param_count = 0;

        if filter.category_id.is_some() {
            param_count += 1;
            query.push_str(&format!(" AND category_id = ${param_count}"));
        }
        if filter.featured.is_some() {
            param_count += 1;
            query.push_str(&format!(" AND featured = ${param_count}"));
        }

        query.push_str(" ORDER BY name");

        let mut q = sqlx::query_as::<_, Product>(&query);

        if let Some(category_id) = filter.category_id {
            q = q.bind(category_id);
        }
        if let Some(featured) = filter.featured {
            q = q.bind(featured);
        }

        q.fetch_all(pool).await
    }

    /// Create a new product.
    pub async fn create(pool: &sqlx::PgPool, input: CreateProduct) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO products (name, description, price, image, category_id, featured, rating, stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image)
        .bind(input.category_id)
        .bind(input.featured)
        .bind(input.rating)
        .bind(input.stock)
        .fetch_one(pool)
        .await
    }

    /// Update a product. Only the supplied fields change.
    pub async fn update(
        pool: &sqlx::PgPool,
        id: Uuid,
        input: UpdateProduct,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut updates = vec!["updated_at = NOW()".to_string()];
        let mut param_idx = 2;

        if input.name.is_some() {
            updates.push(format!("name = ${param_idx}"));
            param_idx += 1;
        }
        if input.description.is_some() {
            updates.push(format!("description = ${param_idx}"));
            param_idx += 1;
        }
        if input.price.is_some() {
            updates.push(format!("price = ${param_idx}"));
            param_idx += 1;
        }
        if input.image.is_some() {
            updates.push(format!("image = ${param_idx}"));
            param_idx += 1;
        }
        if input.category_id.is_some() {
            updates.push(format!("category_id = ${param_idx}"));
            param_idx += 1;
        }
        if input.featured.is_some() {
            updates.push(format!("featured = ${param_idx}"));
            param_idx += 1;
        }
        if input.rating.is_some() {
            updates.push(format!("rating = ${param_idx}"));
            param_idx += 1;
        }
        if input.stock.is_some() {
            updates.push(format!("stock = ${param_idx}"));
        }

        let query = format!(
            "UPDATE products SET {} WHERE id = $1 RETURNING *",
            updates.join(", ")
        );

        let mut q = sqlx::query_as::<_, Product>(&query).bind(id);

        if let Some(ref name) = input.name {
            q = q.bind(name);
        }
        if let Some(ref description) = input.description {
            q = q.bind(description);
        }
        if let Some(price) = input.price {
            q = q.bind(price);
        }
        if let Some(ref image) = input.image {
            q = q.bind(image);
        }
        if let Some(category_id) = input.category_id {
            q = q.bind(category_id);
        }
        if let Some(featured) = input.featured {
            q = q.bind(featured);
        }
        if let Some(rating) = input.rating {
            q = q.bind(rating);
        }
        if let Some(stock) = input.stock {
            q = q.bind(stock);
        }

        q.fetch_optional(pool).await
    }

    /// Delete a product. Returns whether a row was removed.
    pub async fn delete(pool: &sqlx::PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Conditionally decrement stock by `quantity`.
    ///
    /// The `stock >= $2` guard makes check and decrement one atomic statement;
    /// a concurrent checkout that would overdraw the row affects zero rows
    /// instead. Returns `false` in that case so the caller can abort its
    /// transaction.
    pub async fn decrement_stock<'e, E>(
        executor: E,
        id: Uuid,
        quantity: i32,
    ) -> Result<bool, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let result = sqlx::query(
            r"
            UPDATE products
            SET stock = stock - $2, updated_at = NOW()
            WHERE id = $1 AND stock >= $2
            ",
        )
        .bind(id)
        .bind(quantity)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether `quantity` units are currently available.
    #[must_use]
    pub fn has_stock(&self, quantity: i32) -> bool {
        self.stock >= quantity
    }
}
