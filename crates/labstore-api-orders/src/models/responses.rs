//! Response models for the orders API.

use labstore_db::{Invoice, Order, OrderItemWithProduct, User};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Identifying fields of a user, for admin order views.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// An order with its lines, invoice, and (for admin views) the purchaser.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderResponse {
    /// The order.
    #[serde(flatten)]
    pub order: Order,

    /// Order lines with product details.
    pub items: Vec<OrderItemWithProduct>,

    /// The order's invoice. Present for every checkout-created order.
    pub invoice: Option<Invoice>,

    /// Purchasing user; only populated on admin endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

/// An invoice with its order attached.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvoiceResponse {
    /// The invoice.
    #[serde(flatten)]
    pub invoice: Invoice,

    /// The billed order with its lines.
    pub order: OrderResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use labstore_db::UserRole;

    #[test]
    fn test_user_summary_drops_sensitive_fields() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let summary = UserSummary::from(user);
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("ada@example.com"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("role"));
    }
}
