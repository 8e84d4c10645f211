//! Order, invoice and admin order endpoint handlers.

mod admin;
mod invoices;
mod orders;

pub use admin::{admin_get_order_handler, admin_list_orders_handler, admin_update_order_handler};
pub use invoices::{get_invoice_handler, pay_invoice_handler};
pub use orders::{checkout_handler, get_order_handler, list_orders_handler};
