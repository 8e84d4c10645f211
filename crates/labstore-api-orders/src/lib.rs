//! Orders API for labstore.
//!
//! Checkout, order retrieval, invoicing and admin order management. Checkout
//! converts a non-empty cart into an order with snapshotted line prices, an
//! invoice due in seven days, decremented stock and a cleared cart, all
//! inside one transaction with conditional stock decrements.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiOrdersError;
pub use router::{admin_orders_router, orders_router, OrdersState};
