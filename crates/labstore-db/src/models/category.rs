//! Product category model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product category.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    /// Unique identifier.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// When the category was created.
    pub created_at: DateTime<Utc>,

    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}

/// Input for updating a category. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Category {
    /// Find a category by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM categories
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &sqlx::PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM categories
            ORDER BY name
            ",
        )
        .fetch_all(pool)
        .await
    }

    /// Create a new category.
    pub async fn create(pool: &sqlx::PgPool, input: CreateCategory) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING *
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(pool)
        .await
    }

    /// Update a category. Only the supplied fields change.
    pub async fn update(
        pool: &sqlx::PgPool,
        id: Uuid,
        input: UpdateCategory,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut updates = vec!["updated_at = NOW()".to_string()];
        let mut param_idx = 2;

        if input.name.is_some() {
            updates.push(format!("name = ${param_idx}"));
            param_idx += 1;
        }
        if input.description.is_some() {
            updates.push(format!("description = ${param_idx}"));
        }

        let query = format!(
            "UPDATE categories SET {} WHERE id = $1 RETURNING *",
            updates.join(", ")
        );

        let mut q = sqlx::query_as::<_, Category>(&query).bind(id);

        if let Some(ref name) = input.name {
            q = q.bind(name);
        }
        if let Some(ref description) = input.description {
            q = q.bind(description);
        }

        q.fetch_optional(pool).await
    }

    /// Delete a category. Returns whether a row was removed.
    ///
    /// Callers must check [`Self::count_products`] first; the foreign key
    /// constraint rejects deletion while products still reference the row.
    pub async fn delete(pool: &sqlx::PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r"
            DELETE FROM categories
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count products referencing this category.
    pub async fn count_products(pool: &sqlx::PgPool, id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM products
            WHERE category_id = $1
            ",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let category = Category {
            id: Uuid::new_v4(),
            name: "Glassware".to_string(),
            description: Some("Beakers, flasks and cylinders".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains("Glassware"));
    }

    #[test]
    fn test_update_default_is_noop() {
        let update = UpdateCategory::default();
        assert!(update.name.is_none());
        assert!(update.description.is_none());
    }
}
