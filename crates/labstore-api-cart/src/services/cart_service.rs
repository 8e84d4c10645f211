//! Cart management service.
//!
//! One cart per user, created lazily. Adding a product that already has a
//! line increments that line. Stock is validated against the product's
//! current inventory on every mutation, but never decremented here; only
//! checkout touches stock.

use crate::error::ApiCartError;
use crate::models::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use labstore_core::UserId;
use labstore_db::{Cart, CartItem, CartItemWithProduct, Product};
use sqlx::PgPool;
use uuid::Uuid;

/// Service for cart operations. All operations are scoped to the
/// authenticated user's cart.
#[derive(Clone)]
pub struct CartService {
    pool: PgPool,
}

impl CartService {
    /// Create a new cart service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the user's cart with items and products, creating the cart lazily.
    pub async fn get_cart(&self, user_id: UserId) -> Result<CartResponse, ApiCartError> {
        let cart = Cart::get_or_create(&self.pool, *user_id.as_uuid()).await?;
        let items = self.load_items(cart.id).await?;

        Ok(CartResponse { cart, items })
    }

    /// Add a product to the user's cart.
    ///
    /// When a line for the product already exists its quantity is
    /// incremented; otherwise a new line is created. Product stock is
    /// validated but not mutated.
    pub async fn add_item(
        &self,
        user_id: UserId,
        request: AddCartItemRequest,
    ) -> Result<CartItemWithProduct, ApiCartError> {
        let (Some(product_id), Some(quantity)) = (request.product_id, request.quantity) else {
            return Err(ApiCartError::Validation(
                "Invalid request data".to_string(),
            ));
        };
        if quantity < 1 {
            return Err(ApiCartError::Validation(
                "Invalid request data".to_string(),
            ));
        }

        let product = Product::find_by_id(&self.pool, product_id)
            .await?
            .ok_or(ApiCartError::ProductNotFound)?;

        if !product.has_stock(quantity) {
            return Err(ApiCartError::InsufficientStock);
        }

        let cart = Cart::get_or_create(&self.pool, *user_id.as_uuid()).await?;

        let item = match CartItem::find_by_cart_and_product(&self.pool, cart.id, product_id).await? {
            Some(existing) => {
                // The merged quantity is re-validated against stock when the
                // line is next updated; add-time only checks the increment,
                // matching the storefront behavior.
                CartItem::update_quantity(&self.pool, existing.id, existing.quantity + quantity)
                    .await?
                    .ok_or(ApiCartError::ItemNotFound)?
            }
            None => CartItem::create(&self.pool, cart.id, product_id, quantity).await?,
        };

        Cart::touch(&self.pool, cart.id).await?;

        tracing::debug!(
            user_id = %user_id,
            product_id = %product_id,
            quantity = item.quantity,
            "Cart line upserted"
        );

        Ok(CartItemWithProduct { item, product })
    }

    /// Set the absolute quantity of a cart line.
    pub async fn update_item(
        &self,
        user_id: UserId,
        item_id: Uuid,
        request: UpdateCartItemRequest,
    ) -> Result<CartItemWithProduct, ApiCartError> {
        let quantity = request.quantity.unwrap_or(0);
        if quantity < 1 {
            return Err(ApiCartError::Validation("Invalid quantity".to_string()));
        }

        let item = self.find_owned_item(user_id, item_id).await?;

        let product = Product::find_by_id(&self.pool, item.product_id)
            .await?
            .ok_or(ApiCartError::ProductNotFound)?;

        if !product.has_stock(quantity) {
            return Err(ApiCartError::InsufficientStock);
        }

        let item = CartItem::update_quantity(&self.pool, item.id, quantity)
            .await?
            .ok_or(ApiCartError::ItemNotFound)?;

        Ok(CartItemWithProduct { item, product })
    }

    /// Remove a cart line.
    pub async fn remove_item(&self, user_id: UserId, item_id: Uuid) -> Result<(), ApiCartError> {
        let item = self.find_owned_item(user_id, item_id).await?;

        CartItem::delete(&self.pool, item.id).await?;

        tracing::debug!(user_id = %user_id, item_id = %item_id, "Cart line removed");

        Ok(())
    }

    /// Load a cart line and verify it belongs to the user's cart.
    async fn find_owned_item(
        &self,
        user_id: UserId,
        item_id: Uuid,
    ) -> Result<CartItem, ApiCartError> {
        let item = CartItem::find_by_id(&self.pool, item_id)
            .await?
            .ok_or(ApiCartError::ItemNotFound)?;

        let cart = Cart::find_by_user(&self.pool, *user_id.as_uuid())
            .await?
            .ok_or(ApiCartError::Unauthorized)?;

        if item.cart_id != cart.id {
            return Err(ApiCartError::Unauthorized);
        }

        Ok(item)
    }

    /// Load the lines of a cart together with their products.
    async fn load_items(&self, cart_id: Uuid) -> Result<Vec<CartItemWithProduct>, ApiCartError> {
        let items = CartItem::list_by_cart(&self.pool, cart_id).await?;

        let mut with_products = Vec::with_capacity(items.len());
        for item in items {
            let product = Product::find_by_id(&self.pool, item.product_id)
                .await?
                .ok_or(ApiCartError::ProductNotFound)?;
            with_products.push(CartItemWithProduct { item, product });
        }

        Ok(with_products)
    }
}
