//! Handler tests for the Customers domain
//!
//! Exercise the router on an in-memory repository: status codes, JSON
//! shapes and error bodies. Auth is layered on by the application, not here.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_customers::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(CustomerService::new(InMemoryCustomerRepository::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn ana() -> Value {
    json!({
        "name": "Ana Souza",
        "cpf": "123.456.789-09",
        "birth": "1990-04-21",
        "email": "ana@example.com",
        "phone": "11 98765-4321"
    })
}

#[tokio::test]
async fn test_create_customer_returns_201() {
    let response = app()
        .oneshot(json_request("POST", "/", ana()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let customer: Value = json_body(response.into_body()).await;
    assert_eq!(customer["name"], "Ana Souza");
    assert_eq!(customer["cpf"], "12345678909");
    assert_eq!(customer["birth"], "1990-04-21");
    assert!(customer["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_customer_invalid_payload_returns_400() {
    let mut body = ana();
    body["email"] = json!("nope");

    let response = app()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "VALIDATION_ERROR");
    assert!(error["details"]["email"].is_array());
}

#[tokio::test]
async fn test_duplicate_cpf_returns_409() {
    let app = app();
    let first = app
        .clone()
        .oneshot(json_request("POST", "/", ana()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let mut body = ana();
    body["cpf"] = json!("12345678909");
    body["email"] = json!("other@example.com");
    let second = app.oneshot(json_request("POST", "/", body)).await.unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_update_delete_flow() {
    let app = app();
    let created: Customer = json_body(
        app.clone()
            .oneshot(json_request("POST", "/", ana()))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let uri = format!("/{}", created.id);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request("PATCH", &uri, json!({ "name": "Ana S." })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Customer = json_body(response.into_body()).await;
    assert_eq!(updated.name, "Ana S.");
    assert_eq!(updated.email, created.email);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_uuid_returns_400() {
    let response = app()
        .oneshot(empty_request("GET", "/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_UUID");
}

#[tokio::test]
async fn test_list_customers_empty() {
    let response = app().oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let customers: Vec<Customer> = json_body(response.into_body()).await;
    assert!(customers.is_empty());
}
