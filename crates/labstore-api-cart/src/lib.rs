//! Cart API for labstore.
//!
//! REST endpoints for the per-user shopping cart. Carts are created lazily
//! on first access and persist indefinitely; checkout (in the orders API)
//! clears the items but never deletes the cart.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiCartError;
pub use router::{cart_router, CartState};
