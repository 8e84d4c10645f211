//! Order, checkout and invoice service.
//!
//! Checkout converts a non-empty cart into an order, its items, and an
//! invoice, decrements product stock and clears the cart, all inside one
//! transaction. Stock decrements are conditional updates (`stock >= qty`), so
//! two concurrent checkouts racing for the last units cannot both succeed;
//! the loser's transaction rolls back completely.

use crate::error::ApiOrdersError;
use crate::models::{
    CheckoutRequest, InvoiceResponse, OrderResponse, UpdateOrderStatusRequest, UserSummary,
};
use chrono::Utc;
use labstore_core::UserId;
use labstore_db::{
    Cart, CartItem, CreateOrderItem, Invoice, Order, OrderItem, OrderItemWithProduct,
    PaymentStatus, Product, User,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Service for order, checkout, invoice and admin order operations.
#[derive(Clone)]
pub struct OrderService {
    pool: PgPool,
}

impl OrderService {
    /// Create a new order service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's orders, newest first, with items and invoices.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<OrderResponse>, ApiOrdersError> {
        let orders = Order::list_by_user(&self.pool, *user_id.as_uuid()).await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(self.assemble(order, false).await?);
        }

        Ok(responses)
    }

    /// Create an order from the caller's cart.
    pub async fn checkout(
        &self,
        user_id: UserId,
        request: &CheckoutRequest,
    ) -> Result<OrderResponse, ApiOrdersError> {
        let (shipping_address, payment_method) = request.validated()?;

        let cart = Cart::find_by_user(&self.pool, *user_id.as_uuid())
            .await?
            .ok_or(ApiOrdersError::EmptyCart)?;
        let items = CartItem::list_by_cart(&self.pool, cart.id).await?;
        if items.is_empty() {
            return Err(ApiOrdersError::EmptyCart);
        }

        // Load products, compute the total from live prices, and pre-check
        // stock to answer with the offending product before touching rows.
        let mut total_amount = Decimal::ZERO;
        let mut lines = Vec::with_capacity(items.len());
        for item in &items {
            let product = Product::find_by_id(&self.pool, item.product_id)
                .await?
                .ok_or_else(|| {
                    ApiOrdersError::Internal(format!(
                        "Cart references missing product {}",
                        item.product_id
                    ))
                })?;

            if !product.has_stock(item.quantity) {
                return Err(ApiOrdersError::InsufficientStock {
                    product_name: product.name,
                });
            }

            total_amount += product.price * Decimal::from(item.quantity);
            lines.push((
                CreateOrderItem {
                    product_id: product.id,
                    quantity: item.quantity,
                    price: product.price,
                },
                product.name,
            ));
        }

        // Order + items + invoice + stock decrements + cart clear are
        // all-or-nothing.
        let mut tx = self.pool.begin().await?;

        let order: Order = sqlx::query_as(
            r"
            INSERT INTO orders (user_id, total_amount, shipping_address, payment_method)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(user_id.as_uuid())
        .bind(total_amount)
        .bind(&shipping_address)
        .bind(payment_method)
        .fetch_one(&mut *tx)
        .await?;

        for (line, product_name) in &lines {
            OrderItem::insert(&mut *tx, order.id, line).await?;

            // The conditional decrement is the authoritative stock check; the
            // pre-check above can be stale under concurrency.
            let decremented =
                Product::decrement_stock(&mut *tx, line.product_id, line.quantity).await?;
            if !decremented {
                tx.rollback().await?;
                return Err(ApiOrdersError::InsufficientStock {
                    product_name: product_name.clone(),
                });
            }
        }

        let invoice = Invoice::insert(&mut *tx, order.id, Utc::now()).await?;

        CartItem::delete_all_for_cart(&mut *tx, cart.id).await?;

        tx.commit().await?;

        tracing::info!(
            user_id = %user_id,
            order_id = %order.id,
            total_amount = %order.total_amount,
            invoice_number = %invoice.invoice_number,
            "Order created"
        );

        let items = self.load_items(order.id).await?;
        Ok(OrderResponse {
            order,
            items,
            invoice: Some(invoice),
            user: None,
        })
    }

    /// Get an order. Non-admin callers only see their own orders.
    pub async fn get_order(
        &self,
        user_id: UserId,
        is_admin: bool,
        order_id: Uuid,
    ) -> Result<OrderResponse, ApiOrdersError> {
        let order = Order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(ApiOrdersError::OrderNotFound)?;

        if order.user_id != *user_id.as_uuid() && !is_admin {
            return Err(ApiOrdersError::Unauthorized);
        }

        self.assemble(order, false).await
    }

    /// Get an invoice with its order. Restricted to the order's owner or an
    /// admin.
    pub async fn get_invoice(
        &self,
        user_id: UserId,
        is_admin: bool,
        invoice_id: Uuid,
    ) -> Result<InvoiceResponse, ApiOrdersError> {
        let invoice = Invoice::find_by_id(&self.pool, invoice_id)
            .await?
            .ok_or(ApiOrdersError::InvoiceNotFound)?;

        let order = Order::find_by_id(&self.pool, invoice.order_id)
            .await?
            .ok_or(ApiOrdersError::OrderNotFound)?;

        if order.user_id != *user_id.as_uuid() && !is_admin {
            return Err(ApiOrdersError::Unauthorized);
        }

        let order = self.assemble(order, false).await?;
        Ok(InvoiceResponse { invoice, order })
    }

    /// Mark an invoice paid, cascading to the parent order's payment status.
    ///
    /// Restricted to the order's owner or an admin. Paying twice fails with
    /// [`ApiOrdersError::AlreadyPaid`] and leaves `paid_date` unchanged.
    pub async fn pay_invoice(
        &self,
        user_id: UserId,
        is_admin: bool,
        invoice_id: Uuid,
    ) -> Result<Invoice, ApiOrdersError> {
        let invoice = Invoice::find_by_id(&self.pool, invoice_id)
            .await?
            .ok_or(ApiOrdersError::InvoiceNotFound)?;

        let order = Order::find_by_id(&self.pool, invoice.order_id)
            .await?
            .ok_or(ApiOrdersError::OrderNotFound)?;

        if order.user_id != *user_id.as_uuid() && !is_admin {
            return Err(ApiOrdersError::Unauthorized);
        }

        if invoice.is_paid() {
            return Err(ApiOrdersError::AlreadyPaid);
        }

        let mut tx = self.pool.begin().await?;

        let stamped = Invoice::mark_paid(&mut *tx, invoice.id, Utc::now()).await?;
        if !stamped {
            // A concurrent payment won between our read and the update.
            tx.rollback().await?;
            return Err(ApiOrdersError::AlreadyPaid);
        }

        Order::set_payment_status(&mut *tx, order.id, PaymentStatus::Paid).await?;

        tx.commit().await?;

        tracing::info!(invoice_id = %invoice.id, order_id = %order.id, "Invoice paid");

        Invoice::find_by_id(&self.pool, invoice.id)
            .await?
            .ok_or(ApiOrdersError::InvoiceNotFound)
    }

    /// List every order with purchaser summaries (admin).
    pub async fn admin_list(&self) -> Result<Vec<OrderResponse>, ApiOrdersError> {
        let orders = Order::list_all(&self.pool).await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(self.assemble(order, true).await?);
        }

        Ok(responses)
    }

    /// Get a single order with purchaser summary (admin).
    pub async fn admin_get(&self, order_id: Uuid) -> Result<OrderResponse, ApiOrdersError> {
        let order = Order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(ApiOrdersError::OrderNotFound)?;

        self.assemble(order, true).await
    }

    /// Update an order's status and/or payment status (admin).
    ///
    /// Status changes must follow the legal transition graph. Setting the
    /// payment status to `PAID` stamps the invoice's paid date through the
    /// same routine as invoice payment.
    pub async fn admin_update(
        &self,
        order_id: Uuid,
        request: &UpdateOrderStatusRequest,
    ) -> Result<OrderResponse, ApiOrdersError> {
        let (status, payment_status) = request.validated()?;

        let order = Order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(ApiOrdersError::OrderNotFound)?;

        if let Some(next) = status {
            if !order.status.can_transition_to(next) {
                return Err(ApiOrdersError::IllegalTransition {
                    from: order.status.as_str().to_string(),
                    to: next.as_str().to_string(),
                });
            }
        }

        let mut tx = self.pool.begin().await?;

        let updated = Order::update_status(&mut *tx, order.id, status, payment_status)
            .await?
            .ok_or(ApiOrdersError::OrderNotFound)?;

        // Keep the invoice consistent with an administratively settled order.
        // mark_paid is a no-op when the invoice is already stamped.
        if payment_status == Some(PaymentStatus::Paid) {
            if let Some(invoice) = Invoice::find_by_order(&self.pool, order.id).await? {
                Invoice::mark_paid(&mut *tx, invoice.id, Utc::now()).await?;
            }
        }

        tx.commit().await?;

        tracing::info!(
            order_id = %order.id,
            status = ?status,
            payment_status = ?payment_status,
            "Order updated by admin"
        );

        self.assemble(updated, true).await
    }

    /// Attach items, invoice and optionally the purchaser to an order.
    async fn assemble(
        &self,
        order: Order,
        with_user: bool,
    ) -> Result<OrderResponse, ApiOrdersError> {
        let items = self.load_items(order.id).await?;
        let invoice = Invoice::find_by_order(&self.pool, order.id).await?;

        let user = if with_user {
            User::find_by_id(&self.pool, order.user_id)
                .await?
                .map(UserSummary::from)
        } else {
            None
        };

        Ok(OrderResponse {
            order,
            items,
            invoice,
            user,
        })
    }

    /// Load order lines with their products.
    async fn load_items(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderItemWithProduct>, ApiOrdersError> {
        let items = OrderItem::list_by_order(&self.pool, order_id).await?;

        let mut with_products = Vec::with_capacity(items.len());
        for item in items {
            // Product may have been deleted since the order was placed; the
            // line keeps its snapshot price either way.
            let product = Product::find_by_id(&self.pool, item.product_id).await?;
            with_products.push(OrderItemWithProduct { item, product });
        }

        Ok(with_products)
    }
}
