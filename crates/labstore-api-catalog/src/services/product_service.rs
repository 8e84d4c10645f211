//! Product management service.

use crate::error::ApiCatalogError;
use crate::models::{CreateProductRequest, ListProductsQuery, ProductResponse, UpdateProductRequest};
use labstore_db::{Category, CreateProduct, Product, ProductFilter, UpdateProduct};
use sqlx::PgPool;
use uuid::Uuid;

/// Service for product CRUD operations.
#[derive(Clone)]
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    /// Create a new product service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List products with their categories, honoring the query filters.
    pub async fn list(&self, query: &ListProductsQuery) -> Result<Vec<ProductResponse>, ApiCatalogError> {
        let products = Product::list(
            &self.pool,
            &ProductFilter {
                category_id: query.category_id,
                featured: query.featured,
            },
        )
        .await?;

        let mut responses = Vec::with_capacity(products.len());
        for product in products {
            let category = Category::find_by_id(&self.pool, product.category_id).await?;
            responses.push(ProductResponse { product, category });
        }

        Ok(responses)
    }

    /// Get a product with its category.
    pub async fn get(&self, id: Uuid) -> Result<ProductResponse, ApiCatalogError> {
        let product = Product::find_by_id(&self.pool, id)
            .await?
            .ok_or(ApiCatalogError::ProductNotFound)?;

        let category = Category::find_by_id(&self.pool, product.category_id).await?;

        Ok(ProductResponse { product, category })
    }

    /// Create a new product.
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, ApiCatalogError> {
        let (Some(name), Some(description), Some(price), Some(image), Some(category_id)) = (
            request.name,
            request.description,
            request.price,
            request.image,
            request.category_id,
        ) else {
            return Err(ApiCatalogError::Validation(
                "Missing required fields".to_string(),
            ));
        };

        // Reject unknown categories up front rather than surfacing the
        // foreign key violation as a 500.
        if Category::find_by_id(&self.pool, category_id).await?.is_none() {
            return Err(ApiCatalogError::Validation(
                "Unknown category".to_string(),
            ));
        }

        if request.stock < 0 {
            return Err(ApiCatalogError::Validation(
                "Stock cannot be negative".to_string(),
            ));
        }

        let product = Product::create(
            &self.pool,
            CreateProduct {
                name,
                description,
                price,
                image,
                category_id,
                featured: request.featured,
                rating: request.rating,
                stock: request.stock,
            },
        )
        .await?;

        tracing::info!(product_id = %product.id, "Product created");

        Ok(product)
    }

    /// Update a product.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateProductRequest,
    ) -> Result<Product, ApiCatalogError> {
        if let Some(category_id) = request.category_id {
            if Category::find_by_id(&self.pool, category_id).await?.is_none() {
                return Err(ApiCatalogError::Validation(
                    "Unknown category".to_string(),
                ));
            }
        }

        if matches!(request.stock, Some(stock) if stock < 0) {
            return Err(ApiCatalogError::Validation(
                "Stock cannot be negative".to_string(),
            ));
        }

        Product::update(
            &self.pool,
            id,
            UpdateProduct {
                name: request.name,
                description: request.description,
                price: request.price,
                image: request.image,
                category_id: request.category_id,
                featured: request.featured,
                rating: request.rating,
                stock: request.stock,
            },
        )
        .await?
        .ok_or(ApiCatalogError::ProductNotFound)
    }

    /// Delete a product.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiCatalogError> {
        let deleted = Product::delete(&self.pool, id).await?;
        if !deleted {
            return Err(ApiCatalogError::ProductNotFound);
        }

        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
