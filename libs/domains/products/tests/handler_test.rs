//! Handler tests for the Products domain
//!
//! These drive `handlers::router` end to end over an in-memory repository:
//! - Request parsing and validation messages
//! - Response shapes and HTTP status codes
//! - The full create / read / update / delete lifecycle

mod common;

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::InMemoryProductRepository;
use domain_products::{handlers, ProductService, ProductView};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::default()))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn widget() -> Value {
    json!({ "name": "Widget", "category": "Tools", "quantity": 5, "price": 9.99 })
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = app();

    // Create
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", widget()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ProductView = json_body(response.into_body()).await;
    assert!(ObjectId::parse_str(&created.id).is_ok());
    assert_eq!(created.name, "Widget");
    assert_eq!(created.category, "Tools");
    assert_eq!(created.quantity, 5);
    assert_eq!(created.price, 9.99);

    let uri = format!("/{}", created.id);

    // Read back
    let response = app
        .clone()
        .oneshot(empty_request("GET", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: ProductView = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    // Update quantity
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            json!({ "name": "Widget", "category": "Tools", "quantity": 3, "price": 9.99 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: ProductView = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.quantity, 3);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &uri))
        .await
        .unwrap();
    let fetched: ProductView = json_body(response.into_body()).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.quantity, 3);

    // Delete
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "message": "Product deleted successfully" }));

    // Gone
    let response = app
        .clone()
        .oneshot(empty_request("GET", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Product not found" }));

    // Second delete
    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_empty_is_array() {
    let response = app().oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let app = app();
    let mut ids = HashSet::new();

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/", widget()))
            .await
            .unwrap();
        let created: ProductView = json_body(response.into_body()).await;
        assert!(ids.insert(created.id));
    }

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let listed: Vec<ProductView> = json_body(response.into_body()).await;
    assert_eq!(listed.len(), 5);
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let client_id = ObjectId::new().to_hex();
    let mut body = widget();
    body["id"] = json!(client_id);

    let response = app()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ProductView = json_body(response.into_body()).await;
    assert_ne!(created.id, client_id);
}

#[tokio::test]
async fn test_malformed_client_id_is_invalid_body() {
    let mut body = widget();
    body["id"] = json!("abc");

    let response = app()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Invalid request body" }));
}

#[tokio::test]
async fn test_create_without_name() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "category": "Tools", "quantity": 1, "price": 1.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Product name is required" }));
}

#[tokio::test]
async fn test_create_without_category() {
    let response = app()
        .oneshot(json_request("POST", "/", json!({ "name": "Widget" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Product category is required" }));
}

fn raw_json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_create_with_empty_or_null_body_reaches_validation() {
    let app = app();

    for body in ["", "null"] {
        let response = app
            .clone()
            .oneshot(raw_json_request("POST", "/", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        let json: Value = json_body(response.into_body()).await;
        assert_eq!(json, json!({ "error": "Product name is required" }));
    }
}

#[tokio::test]
async fn test_update_with_null_body_reaches_validation() {
    let uri = format!("/{}", ObjectId::new());
    let response = app()
        .oneshot(raw_json_request("PUT", &uri, "null"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = json_body(response.into_body()).await;
    assert_eq!(json, json!({ "error": "Product name is required" }));
}

#[tokio::test]
async fn test_create_with_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Invalid request body" }));
}

#[tokio::test]
async fn test_get_malformed_id() {
    let response = app()
        .oneshot(empty_request("GET", "/not-a-valid-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Invalid product ID" }));
}

#[tokio::test]
async fn test_unknown_id_is_not_found_for_every_operation() {
    let app = app();
    let uri = format!("/{}", ObjectId::new());

    for request in [
        empty_request("GET", &uri),
        json_request("PUT", &uri, widget()),
        empty_request("DELETE", &uri),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_update_validates_payload() {
    let app = app();
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", widget()))
        .await
        .unwrap();
    let created: ProductView = json_body(response.into_body()).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({ "name": "Widget", "category": null }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Product category is required" }));
}
