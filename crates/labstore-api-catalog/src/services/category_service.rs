//! Category management service.

use crate::error::ApiCatalogError;
use crate::models::{
    CategoryDetailResponse, CategoryListEntry, CreateCategoryRequest, UpdateCategoryRequest,
};
use labstore_db::{Category, CreateCategory, Product, ProductFilter, UpdateCategory};
use sqlx::PgPool;
use uuid::Uuid;

/// Service for category CRUD operations.
#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    /// Create a new category service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories with their product counts.
    pub async fn list(&self) -> Result<Vec<CategoryListEntry>, ApiCatalogError> {
        let categories = Category::list(&self.pool).await?;

        let mut entries = Vec::with_capacity(categories.len());
        for category in categories {
            let product_count = Category::count_products(&self.pool, category.id).await?;
            entries.push(CategoryListEntry {
                category,
                product_count,
            });
        }

        Ok(entries)
    }

    /// Get a category with its products.
    pub async fn get(&self, id: Uuid) -> Result<CategoryDetailResponse, ApiCatalogError> {
        let category = Category::find_by_id(&self.pool, id)
            .await?
            .ok_or(ApiCatalogError::CategoryNotFound)?;

        let products = Product::list(
            &self.pool,
            &ProductFilter {
                category_id: Some(id),
                featured: None,
            },
        )
        .await?;

        Ok(CategoryDetailResponse { category, products })
    }

    /// Create a new category.
    pub async fn create(&self, request: CreateCategoryRequest) -> Result<Category, ApiCatalogError> {
        let name = request
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ApiCatalogError::Validation("Missing required fields".to_string()))?;

        let category = Category::create(
            &self.pool,
            CreateCategory {
                name,
                description: request.description,
            },
        )
        .await?;

        tracing::info!(category_id = %category.id, "Category created");

        Ok(category)
    }

    /// Update a category.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCategoryRequest,
    ) -> Result<Category, ApiCatalogError> {
        Category::update(
            &self.pool,
            id,
            UpdateCategory {
                name: request.name,
                description: request.description,
            },
        )
        .await?
        .ok_or(ApiCatalogError::CategoryNotFound)
    }

    /// Delete a category.
    ///
    /// Fails with [`ApiCatalogError::CategoryHasProducts`] while any product
    /// still references the category.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiCatalogError> {
        let category = Category::find_by_id(&self.pool, id)
            .await?
            .ok_or(ApiCatalogError::CategoryNotFound)?;

        let product_count = Category::count_products(&self.pool, id).await?;
        if product_count > 0 {
            return Err(ApiCatalogError::CategoryHasProducts);
        }

        Category::delete(&self.pool, id).await?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category deleted");

        Ok(())
    }
}
