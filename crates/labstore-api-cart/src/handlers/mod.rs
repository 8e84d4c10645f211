//! Cart endpoint handlers.

mod cart;

pub use cart::{add_item_handler, get_cart_handler, remove_item_handler, update_item_handler};
