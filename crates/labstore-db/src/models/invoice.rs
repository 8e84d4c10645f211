//! Invoice model.
//!
//! One invoice per order, created inside the checkout transaction. The
//! invoice number is derived from the issue timestamp and a fragment of the
//! order id; the due date is seven days after issue. `paid_date` is set
//! exactly once.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Days between issue and due date.
pub const PAYMENT_TERM_DAYS: i64 = 7;

/// A billing record for an order.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Invoice {
    /// Unique identifier.
    pub id: Uuid,

    /// The order this invoice bills. Unique, one invoice per order.
    pub order_id: Uuid,

    /// Human-facing invoice number, `INV-<millis>-<order id fragment>`.
    pub invoice_number: String,

    /// When the invoice was issued.
    pub issued_date: DateTime<Utc>,

    /// Payment deadline, issue date plus seven days.
    pub due_date: DateTime<Utc>,

    /// When the invoice was paid. `None` while outstanding.
    pub paid_date: Option<DateTime<Utc>>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,

    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Build the invoice number for an order issued at `issued`.
    #[must_use]
    pub fn build_number(order_id: Uuid, issued: DateTime<Utc>) -> String {
        let hex = order_id.simple().to_string();
        format!("INV-{}-{}", issued.timestamp_millis(), &hex[..8])
    }

    /// Find an invoice by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM invoices
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find the invoice of an order.
    pub async fn find_by_order(
        pool: &sqlx::PgPool,
        order_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM invoices
            WHERE order_id = $1
            ",
        )
        .bind(order_id)
        .fetch_optional(pool)
        .await
    }

    /// Insert the invoice for an order. Runs inside the checkout transaction.
    pub async fn insert<'e, E>(
        executor: E,
        order_id: Uuid,
        issued: DateTime<Utc>,
    ) -> Result<Self, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let invoice_number = Self::build_number(order_id, issued);
        let due_date = issued + Duration::days(PAYMENT_TERM_DAYS);

        sqlx::query_as(
            r"
            INSERT INTO invoices (order_id, invoice_number, issued_date, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(order_id)
        .bind(&invoice_number)
        .bind(issued)
        .bind(due_date)
        .fetch_one(executor)
        .await
    }

    /// Stamp `paid_date`, guarded against double payment.
    ///
    /// The `paid_date IS NULL` predicate makes the stamp idempotence-safe
    /// under concurrency: the second of two racing payments affects zero rows.
    /// Returns `false` when the invoice was already paid.
    pub async fn mark_paid<'e, E>(
        executor: E,
        id: Uuid,
        paid: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let result = sqlx::query(
            r"
            UPDATE invoices
            SET paid_date = $2, updated_at = NOW()
            WHERE id = $1 AND paid_date IS NULL
            ",
        )
        .bind(id)
        .bind(paid)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether this invoice has been paid.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.paid_date.is_some()
    }
}
