//! Catalog API for labstore.
//!
//! REST endpoints for browsing and administering the product and category
//! catalog. Reads are public; writes require the admin role. Category
//! deletion is blocked while products still reference the category.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiCatalogError;
pub use router::{catalog_router, CatalogState};
