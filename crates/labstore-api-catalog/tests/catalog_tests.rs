//! Integration tests for the catalog API.
//!
//! These tests require a running PostgreSQL instance.
//! Run with: `cargo test -p labstore-api-catalog --features integration`

#![cfg(feature = "integration")]

mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_category_crud_roundtrip() {
    let ctx = TestContext::new().await;

    // Create
    let response = ctx
        .request(
            Method::POST,
            "/categories",
            Some(TestContext::admin_claims()),
            Some(json!({"name": "Glassware", "description": "Beakers and flasks"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let category = response_json(response).await;
    let id = category["id"].as_str().unwrap().to_string();

    // Read
    let response = ctx
        .request(Method::GET, &format!("/categories/{id}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = response_json(response).await;
    assert_eq!(detail["name"], "Glassware");
    assert!(detail["products"].as_array().unwrap().is_empty());

    // Update
    let response = ctx
        .request(
            Method::PUT,
            &format!("/categories/{id}"),
            Some(TestContext::admin_claims()),
            Some(json!({"name": "Laboratory Glassware"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Delete
    let response = ctx
        .request(
            Method::DELETE,
            &format!("/categories/{id}"),
            Some(TestContext::admin_claims()),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Gone
    let response = ctx
        .request(Method::GET, &format!("/categories/{id}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_category_requires_admin() {
    let ctx = TestContext::new().await;

    let body = json!({"name": "Reagents"});

    // Anonymous
    let response = ctx
        .request(Method::POST, "/categories", None, Some(body.clone()))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Non-admin
    let response = ctx
        .request(
            Method::POST,
            "/categories",
            Some(TestContext::user_claims()),
            Some(body),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_category_missing_name_is_400() {
    let ctx = TestContext::new().await;

    let response = ctx
        .request(
            Method::POST,
            "/categories",
            Some(TestContext::admin_claims()),
            Some(json!({"description": "no name"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_delete_category_with_products_is_blocked() {
    let ctx = TestContext::new().await;

    // Category with one product
    let response = ctx
        .request(
            Method::POST,
            "/categories",
            Some(TestContext::admin_claims()),
            Some(json!({"name": "Centrifuges"})),
        )
        .await;
    let category = response_json(response).await;
    let category_id = category["id"].as_str().unwrap().to_string();

    let response = ctx
        .request(
            Method::POST,
            "/products",
            Some(TestContext::admin_claims()),
            Some(json!({
                "name": "Benchtop centrifuge",
                "description": "6x15ml rotor",
                "price": "1299.00",
                "image": "/images/centrifuge.jpg",
                "category_id": category_id,
                "stock": 2
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Deletion must fail with 400 and leave the category intact
    let response = ctx
        .request(
            Method::DELETE,
            &format!("/categories/{category_id}"),
            Some(TestContext::admin_claims()),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("associated products"));

    let response = ctx
        .request(Method::GET, &format!("/categories/{category_id}"), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_product_filters() {
    let ctx = TestContext::new().await;

    let response = ctx
        .request(
            Method::POST,
            "/categories",
            Some(TestContext::admin_claims()),
            Some(json!({"name": "Filter Test Category"})),
        )
        .await;
    let category = response_json(response).await;
    let category_id = category["id"].as_str().unwrap().to_string();

    for (name, featured) in [("Featured flask", true), ("Plain flask", false)] {
        let response = ctx
            .request(
                Method::POST,
                "/products",
                Some(TestContext::admin_claims()),
                Some(json!({
                    "name": name,
                    "description": "test",
                    "price": "5.00",
                    "image": "/images/flask.jpg",
                    "category_id": category_id,
                    "featured": featured
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = ctx
        .request(
            Method::GET,
            &format!("/products?category_id={category_id}&featured=true"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let products = response_json(response).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Featured flask");
}

#[tokio::test]
async fn test_create_product_unknown_category_is_400() {
    let ctx = TestContext::new().await;

    let response = ctx
        .request(
            Method::POST,
            "/products",
            Some(TestContext::admin_claims()),
            Some(json!({
                "name": "Orphan product",
                "description": "test",
                "price": "1.00",
                "image": "/images/x.jpg",
                "category_id": uuid::Uuid::new_v4().to_string()
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
