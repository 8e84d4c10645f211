//! Request models for the catalog API.
//!
//! Required fields are modeled as `Option` so that missing values surface as
//! a 400 with a descriptive message instead of a deserialization rejection.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Request to create a category.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: Option<String>,

    /// Optional description.
    pub description: Option<String>,
}

/// Request to update a category. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request to create a product.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Product name.
    pub name: Option<String>,

    /// Product description.
    pub description: Option<String>,

    /// Unit price.
    pub price: Option<Decimal>,

    /// Image URL or path.
    pub image: Option<String>,

    /// Owning category.
    pub category_id: Option<Uuid>,

    /// Featured flag, defaults to false.
    #[serde(default)]
    pub featured: bool,

    /// Initial rating, defaults to 0.
    #[serde(default)]
    pub rating: Decimal,

    /// Initial stock, defaults to 0.
    #[serde(default)]
    pub stock: i32,
}

/// Request to update a product. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category_id: Option<Uuid>,
    pub featured: Option<bool>,
    pub rating: Option<Decimal>,
    pub stock: Option<i32>,
}

/// Query parameters for listing products.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Only products in this category.
    pub category_id: Option<Uuid>,

    /// Only products matching this featured flag.
    pub featured: Option<bool>,
}
