//! Strongly typed identifiers.
//!
//! Newtype wrappers around [`Uuid`] for every entity in the store. Using
//! distinct types prevents accidentally passing a product id where an order
//! id is expected.
//!
//! # Example
//!
//! ```
//! use labstore_core::{ProductId, OrderId};
//!
//! let product = ProductId::new();
//! let order = OrderId::new();
//!
//! fn requires_product(id: ProductId) -> String {
//!     id.to_string()
//! }
//!
//! let result = requires_product(product);
//! // requires_product(order); // does not compile
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The underlying UUID parse error message.
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for users.
    ///
    /// # Example
    ///
    /// ```
    /// use labstore_core::UserId;
    /// use uuid::Uuid;
    ///
    /// let user_id = UserId::new();
    /// println!("User: {}", user_id);
    ///
    /// let uuid = Uuid::new_v4();
    /// let user_id = UserId::from_uuid(uuid);
    /// assert_eq!(user_id.as_uuid(), &uuid);
    /// ```
    UserId
);

define_id!(
    /// Strongly typed identifier for product categories.
    CategoryId
);

define_id!(
    /// Strongly typed identifier for products.
    ///
    /// # Example
    ///
    /// ```
    /// use labstore_core::ProductId;
    ///
    /// let product_id: ProductId =
    ///     "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
    /// ```
    ProductId
);

define_id!(
    /// Strongly typed identifier for shopping carts.
    CartId
);

define_id!(
    /// Strongly typed identifier for cart line items.
    CartItemId
);

define_id!(
    /// Strongly typed identifier for orders.
    OrderId
);

define_id!(
    /// Strongly typed identifier for invoices.
    InvoiceId
);
