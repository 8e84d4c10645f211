//! Integration tests for checkout.
//!
//! These tests require a running PostgreSQL instance.
//! Run with: `cargo test -p labstore-api-orders --features integration`

#![cfg(feature = "integration")]

mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, TestContext};
use labstore_db::UserRole;
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn test_checkout_happy_path() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let product = ctx.create_product(dec!(10.00), 5).await;
    ctx.fill_cart(&user, &product, 2).await;

    let response = ctx
        .request(
            Method::POST,
            "/orders",
            Some(claims.clone()),
            Some(json!({
                "shipping_address": "X",
                "payment_method": "BANK_TRANSFER"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let order = response_json(response).await;

    // total = 10.00 * 2
    assert_eq!(order["total_amount"], "20.00");
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["payment_status"], "PENDING");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["items"][0]["quantity"], 2);
    assert_eq!(order["items"][0]["price"], "10.00");

    // Invoice: INV- number, due in 7 days
    let invoice = &order["invoice"];
    assert!(invoice["invoice_number"]
        .as_str()
        .unwrap()
        .starts_with("INV-"));
    let issued = chrono::DateTime::parse_from_rfc3339(invoice["issued_date"].as_str().unwrap())
        .unwrap();
    let due = chrono::DateTime::parse_from_rfc3339(invoice["due_date"].as_str().unwrap()).unwrap();
    assert_eq!((due - issued).num_days(), 7);

    // Stock decremented 5 -> 3
    assert_eq!(ctx.stock_of(product.id).await, 3);

    // Cart cleared
    let remaining: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM cart_items ci JOIN carts c ON ci.cart_id = c.id WHERE c.user_id = $1",
    )
    .bind(user.id)
    .fetch_one(ctx.pool.inner())
    .await
    .unwrap();
    assert_eq!(remaining, 0);

    // Order appears in the caller's list
    let response = ctx.request(Method::GET, "/orders", Some(claims), None).await;
    let orders = response_json(response).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_empty_cart_is_400() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;

    let response = ctx
        .request(
            Method::POST,
            "/orders",
            Some(claims),
            Some(json!({
                "shipping_address": "X",
                "payment_method": "PAYPAL"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Cart is empty");

    // No order was created for the caller
    let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE user_id = $1")
        .bind(user.id)
        .fetch_one(ctx.pool.inner())
        .await
        .unwrap();
    assert_eq!(orders, 0);
}

#[tokio::test]
async fn test_checkout_missing_fields_is_400() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let product = ctx.create_product(dec!(10.00), 5).await;
    ctx.fill_cart(&user, &product, 1).await;

    let response = ctx
        .request(
            Method::POST,
            "/orders",
            Some(claims),
            Some(json!({"shipping_address": "X"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing changed
    assert_eq!(ctx.stock_of(product.id).await, 5);
}

#[tokio::test]
async fn test_checkout_insufficient_stock_names_product_and_rolls_back() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let plenty = ctx.create_product(dec!(5.00), 10).await;
    let scarce = ctx.create_product(dec!(7.00), 1).await;
    ctx.fill_cart(&user, &plenty, 2).await;
    ctx.fill_cart(&user, &scarce, 3).await;

    let response = ctx
        .request(
            Method::POST,
            "/orders",
            Some(claims),
            Some(json!({
                "shipping_address": "X",
                "payment_method": "CREDIT_CARD"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains(&scarce.name));

    // All-or-nothing: neither product's stock changed, cart intact
    assert_eq!(ctx.stock_of(plenty.id).await, 10);
    assert_eq!(ctx.stock_of(scarce.id).await, 1);

    let remaining: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM cart_items ci JOIN carts c ON ci.cart_id = c.id WHERE c.user_id = $1",
    )
    .bind(user.id)
    .fetch_one(ctx.pool.inner())
    .await
    .unwrap();
    assert_eq!(remaining, 2);
}

#[tokio::test]
async fn test_checkout_total_matches_item_sum() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let a = ctx.create_product(dec!(3.25), 10).await;
    let b = ctx.create_product(dec!(12.40), 10).await;
    ctx.fill_cart(&user, &a, 3).await;
    ctx.fill_cart(&user, &b, 2).await;

    let response = ctx
        .request(
            Method::POST,
            "/orders",
            Some(claims),
            Some(json!({
                "shipping_address": "1 Science Park",
                "payment_method": "CASH_ON_DELIVERY"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let order = response_json(response).await;

    // 3 * 3.25 + 2 * 12.40 = 34.55
    assert_eq!(order["total_amount"], "34.55");
}

#[tokio::test]
async fn test_concurrent_checkouts_cannot_oversell() {
    let ctx = TestContext::new().await;
    let (user_a, claims_a) = ctx.create_user(UserRole::User).await;
    let (user_b, claims_b) = ctx.create_user(UserRole::User).await;
    let product = ctx.create_product(dec!(10.00), 4).await;
    ctx.fill_cart(&user_a, &product, 3).await;
    ctx.fill_cart(&user_b, &product, 3).await;

    let body = json!({
        "shipping_address": "X",
        "payment_method": "BANK_TRANSFER"
    });

    let (response_a, response_b) = tokio::join!(
        ctx.request(Method::POST, "/orders", Some(claims_a), Some(body.clone())),
        ctx.request(Method::POST, "/orders", Some(claims_b), Some(body)),
    );

    let statuses = [response_a.status(), response_b.status()];
    let successes = statuses
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    let rejections = statuses
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();

    // Stock 4, two requests for 3 each: exactly one can succeed
    assert_eq!(successes, 1, "exactly one checkout must succeed");
    assert_eq!(rejections, 1, "the other must get insufficient stock");
    assert_eq!(ctx.stock_of(product.id).await, 1);
}

#[tokio::test]
async fn test_order_visible_to_owner_and_admin_only() {
    let ctx = TestContext::new().await;
    let (owner, owner_claims) = ctx.create_user(UserRole::User).await;
    let (_other, other_claims) = ctx.create_user(UserRole::User).await;
    let (_admin, admin_claims) = ctx.create_user(UserRole::Admin).await;
    let product = ctx.create_product(dec!(10.00), 5).await;
    ctx.fill_cart(&owner, &product, 1).await;

    let response = ctx
        .request(
            Method::POST,
            "/orders",
            Some(owner_claims.clone()),
            Some(json!({
                "shipping_address": "X",
                "payment_method": "PAYPAL"
            })),
        )
        .await;
    let order = response_json(response).await;
    let order_id = order["id"].as_str().unwrap().to_string();

    let response = ctx
        .request(
            Method::GET,
            &format!("/orders/{order_id}"),
            Some(owner_claims),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx
        .request(
            Method::GET,
            &format!("/orders/{order_id}"),
            Some(other_claims),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = ctx
        .request(
            Method::GET,
            &format!("/orders/{order_id}"),
            Some(admin_claims),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}
