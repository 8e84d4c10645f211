//! Database models.
//!
//! One module per table. Each model is a `sqlx::FromRow` struct with inherent
//! async query methods, plus request structs for creation and update.

mod cart;
mod cart_item;
mod category;
mod invoice;
mod order;
mod order_item;
mod product;
mod user;

pub use cart::Cart;
pub use cart_item::{CartItem, CartItemWithProduct};
pub use category::{Category, CreateCategory, UpdateCategory};
pub use invoice::Invoice;
pub use order::{Order, OrderStatus, PaymentMethod, PaymentStatus};
pub use order_item::{CreateOrderItem, OrderItem, OrderItemWithProduct};
pub use product::{CreateProduct, Product, ProductFilter, UpdateProduct};
pub use user::{CreateUser, UpdateUser, User, UserRole};
