//! Catalog services.

mod category_service;
mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
