//! labstore Database Library
//!
//! Connection pooling, embedded migrations, and the relational models for the
//! store: users, categories, products, carts, orders, and invoices.
//!
//! # Modules
//!
//! - [`pool`] - `DbPool`, a thin wrapper over `sqlx::PgPool`
//! - [`migrations`] - embedded, versioned SQL migrations
//! - [`models`] - one module per table, `sqlx::FromRow` structs with query methods
//! - [`error`] - unified [`DbError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use labstore_db::{DbPool, run_migrations, Product};
//!
//! let pool = DbPool::connect("postgres://localhost/labstore").await?;
//! run_migrations(&pool).await?;
//!
//! let products = Product::list(pool.inner(), &Default::default()).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{
    Cart, CartItem, CartItemWithProduct, Category, CreateCategory, CreateOrderItem, CreateProduct,
    CreateUser, Invoice, Order, OrderItem, OrderItemWithProduct, OrderStatus, PaymentMethod,
    PaymentStatus, Product, ProductFilter, UpdateCategory, UpdateProduct, UpdateUser, User,
    UserRole,
};
pub use pool::DbPool;
