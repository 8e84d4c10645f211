//! Response models for the catalog API.

use labstore_db::{Category, Product};
use serde::Serialize;
use utoipa::ToSchema;

/// A category in a list response, with its product count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryListEntry {
    /// The category.
    #[serde(flatten)]
    pub category: Category,

    /// Number of products referencing the category.
    pub product_count: i64,
}

/// A single category with its products.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryDetailResponse {
    /// The category.
    #[serde(flatten)]
    pub category: Category,

    /// Products in the category.
    pub products: Vec<Product>,
}

/// A product with its category attached.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    /// The product.
    #[serde(flatten)]
    pub product: Product,

    /// The owning category.
    pub category: Option<Category>,
}

/// Confirmation body for delete operations.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}
