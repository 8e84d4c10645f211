//! Request and response models for the cart API.

use labstore_db::{Cart, CartItemWithProduct};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request to add a product to the cart.
///
/// Required fields are modeled as `Option` so that missing values surface as
/// a 400 with a descriptive message instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    /// Product to add.
    pub product_id: Option<Uuid>,

    /// Quantity to add, at least 1.
    pub quantity: Option<i32>,
}

/// Request to set the absolute quantity of a cart line.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    /// New quantity, at least 1.
    pub quantity: Option<i32>,
}

/// The caller's cart with its lines and products.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartResponse {
    /// The cart.
    #[serde(flatten)]
    pub cart: Cart,

    /// Cart lines with product details.
    pub items: Vec<CartItemWithProduct>,
}

/// Confirmation body for removals.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RemovedResponse {
    pub success: bool,
}
