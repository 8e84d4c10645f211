//! Integration tests for admin order management.
//!
//! These tests require a running PostgreSQL instance.
//! Run with: `cargo test -p labstore-api-orders --features integration`

#![cfg(feature = "integration")]

mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, TestContext};
use labstore_auth::JwtClaims;
use labstore_db::UserRole;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Checkout a one-line cart and return the order JSON.
async fn place_order(ctx: &TestContext, claims: &JwtClaims, user: &labstore_db::User) -> Value {
    let product = ctx.create_product(dec!(15.00), 5).await;
    ctx.fill_cart(user, &product, 1).await;

    let response = ctx
        .request(
            Method::POST,
            "/orders",
            Some(claims.clone()),
            Some(json!({
                "shipping_address": "X",
                "payment_method": "CREDIT_CARD"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn test_admin_endpoints_require_admin_role() {
    let ctx = TestContext::new().await;
    let (_user, user_claims) = ctx.create_user(UserRole::User).await;

    let response = ctx
        .request(Method::GET, "/admin/orders", Some(user_claims), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = ctx.request(Method::GET, "/admin/orders", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_sees_order_with_user_summary() {
    let ctx = TestContext::new().await;
    let (user, user_claims) = ctx.create_user(UserRole::User).await;
    let (_admin, admin_claims) = ctx.create_user(UserRole::Admin).await;
    let order = place_order(&ctx, &user_claims, &user).await;
    let order_id = order["id"].as_str().unwrap();

    let response = ctx
        .request(
            Method::GET,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = response_json(response).await;

    assert_eq!(detail["user"]["email"], user.email.as_str());
    assert!(detail["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_admin_legal_status_transition() {
    let ctx = TestContext::new().await;
    let (user, user_claims) = ctx.create_user(UserRole::User).await;
    let (_admin, admin_claims) = ctx.create_user(UserRole::Admin).await;
    let order = place_order(&ctx, &user_claims, &user).await;
    let order_id = order["id"].as_str().unwrap();

    let response = ctx
        .request(
            Method::PATCH,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims.clone()),
            Some(json!({"status": "PROCESSING"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["status"], "PROCESSING");

    let response = ctx
        .request(
            Method::PATCH,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims),
            Some(json!({"status": "SHIPPED"})),
        )
        .await;
    let updated = response_json(response).await;
    assert_eq!(updated["status"], "SHIPPED");
}

#[tokio::test]
async fn test_admin_illegal_status_transition_is_400() {
    let ctx = TestContext::new().await;
    let (user, user_claims) = ctx.create_user(UserRole::User).await;
    let (_admin, admin_claims) = ctx.create_user(UserRole::Admin).await;
    let order = place_order(&ctx, &user_claims, &user).await;
    let order_id = order["id"].as_str().unwrap();

    // PENDING -> DELIVERED skips the graph
    let response = ctx
        .request(
            Method::PATCH,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims.clone()),
            Some(json!({"status": "DELIVERED"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("PENDING"));

    // Status unchanged
    let response = ctx
        .request(
            Method::GET,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims),
            None,
        )
        .await;
    let detail = response_json(response).await;
    assert_eq!(detail["status"], "PENDING");
}

#[tokio::test]
async fn test_admin_unknown_status_value_is_400() {
    let ctx = TestContext::new().await;
    let (user, user_claims) = ctx.create_user(UserRole::User).await;
    let (_admin, admin_claims) = ctx.create_user(UserRole::Admin).await;
    let order = place_order(&ctx, &user_claims, &user).await;
    let order_id = order["id"].as_str().unwrap();

    let response = ctx
        .request(
            Method::PATCH,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims),
            Some(json!({"status": "TELEPORTED"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid order status");
}

#[tokio::test]
async fn test_admin_empty_update_is_400() {
    let ctx = TestContext::new().await;
    let (user, user_claims) = ctx.create_user(UserRole::User).await;
    let (_admin, admin_claims) = ctx.create_user(UserRole::Admin).await;
    let order = place_order(&ctx, &user_claims, &user).await;
    let order_id = order["id"].as_str().unwrap();

    let response = ctx
        .request(
            Method::PATCH,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims),
            Some(json!({})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_marking_paid_stamps_invoice() {
    let ctx = TestContext::new().await;
    let (user, user_claims) = ctx.create_user(UserRole::User).await;
    let (_admin, admin_claims) = ctx.create_user(UserRole::Admin).await;
    let order = place_order(&ctx, &user_claims, &user).await;
    let order_id = order["id"].as_str().unwrap();
    assert!(order["invoice"]["paid_date"].is_null());

    let response = ctx
        .request(
            Method::PATCH,
            &format!("/admin/orders/{order_id}"),
            Some(admin_claims),
            Some(json!({"payment_status": "PAID"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;

    assert_eq!(updated["payment_status"], "PAID");
    // Same stamping routine as the invoice payment endpoint
    assert!(!updated["invoice"]["paid_date"].is_null());
}
