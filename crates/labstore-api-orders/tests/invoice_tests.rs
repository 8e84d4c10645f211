//! Integration tests for invoice retrieval and payment.
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

/// Checkout a one-line cart and return (invoice id, order id).
async fn place_order(ctx: &TestContext, claims: &JwtClaims, user: &labstore_db::User) -> (String, String) {
    let product = ctx.create_product(dec!(10.00), 5).await;
    ctx.fill_cart(user, &product, 1).await;

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
    let order: Value = response_json(response).await;

    (
        order["invoice"]["id"].as_str().unwrap().to_string(),
        order["id"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_get_invoice_includes_order() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let (invoice_id, order_id) = place_order(&ctx, &claims, &user).await;

    let response = ctx
        .request(
            Method::GET,
            &format!("/invoices/{invoice_id}"),
            Some(claims),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let invoice = response_json(response).await;

    assert_eq!(invoice["order"]["id"], order_id.as_str());
    assert_eq!(invoice["order"]["items"].as_array().unwrap().len(), 1);
    assert!(invoice["paid_date"].is_null());
}

#[tokio::test]
async fn test_get_invoice_of_other_user_is_unauthorized() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let (_other, other_claims) = ctx.create_user(UserRole::User).await;
    let (invoice_id, _) = place_order(&ctx, &claims, &user).await;

    let response = ctx
        .request(
            Method::GET,
            &format!("/invoices/{invoice_id}"),
            Some(other_claims),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_pay_invoice_cascades_to_order() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let (invoice_id, order_id) = place_order(&ctx, &claims, &user).await;

    let response = ctx
        .request(
            Method::PUT,
            &format!("/invoices/{invoice_id}/pay"),
            Some(claims.clone()),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let invoice = response_json(response).await;
    assert!(!invoice["paid_date"].is_null());

    // Parent order's payment status flipped to PAID in the same transaction
    let response = ctx
        .request(Method::GET, &format!("/orders/{order_id}"), Some(claims), None)
        .await;
    let order = response_json(response).await;
    assert_eq!(order["payment_status"], "PAID");
}

#[tokio::test]
async fn test_pay_invoice_twice_is_rejected() {
    let ctx = TestContext::new().await;
    let (user, claims) = ctx.create_user(UserRole::User).await;
    let (invoice_id, _) = place_order(&ctx, &claims, &user).await;

    let response = ctx
        .request(
            Method::PUT,
            &format!("/invoices/{invoice_id}/pay"),
            Some(claims.clone()),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = response_json(response).await;
    let paid_date = first["paid_date"].as_str().unwrap().to_string();

    let response = ctx
        .request(
            Method::PUT,
            &format!("/invoices/{invoice_id}/pay"),
            Some(claims.clone()),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invoice is already paid");

    // paid_date unchanged
    let response = ctx
        .request(
            Method::GET,
            &format!("/invoices/{invoice_id}"),
            Some(claims),
            None,
        )
        .await;
    let invoice = response_json(response).await;
    assert_eq!(invoice["paid_date"], paid_date.as_str());
}

#[tokio::test]
async fn test_unknown_invoice_is_404() {
    let ctx = TestContext::new().await;
    let (_user, claims) = ctx.create_user(UserRole::User).await;

    let response = ctx
        .request(
            Method::PUT,
            &format!("/invoices/{}/pay", uuid::Uuid::new_v4()),
            Some(claims),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
