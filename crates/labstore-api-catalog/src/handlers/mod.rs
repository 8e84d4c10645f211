//! Catalog endpoint handlers.
//!
//! Read endpoints are public. Mutating endpoints check the admin role
//! themselves since the router mixes public and admin methods on the same
//! paths.

mod categories;
mod products;

pub use categories::{
    create_category_handler, delete_category_handler, get_category_handler,
    list_categories_handler, update_category_handler,
};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};

use crate::error::ApiCatalogError;
use labstore_auth::JwtClaims;

/// Require an authenticated admin caller.
pub(crate) fn require_admin(claims: Option<&JwtClaims>) -> Result<&JwtClaims, ApiCatalogError> {
    match claims {
        Some(claims) if claims.is_admin() => Ok(claims),
        _ => Err(ApiCatalogError::Unauthorized),
    }
}
