//! Request and response models for the orders API.

mod requests;
mod responses;

pub use requests::{CheckoutRequest, UpdateOrderStatusRequest};
pub use responses::{InvoiceResponse, OrderResponse, UserSummary};
