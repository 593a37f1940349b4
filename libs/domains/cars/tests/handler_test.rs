//! Handler tests for the Cars domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_cars::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(CarService::new(InMemoryCarRepository::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn uno() -> Value {
    json!({
        "model": "Fiat Uno",
        "color": "red",
        "year": 2015,
        "valuePerDay": 89.9,
        "numberOfPassengers": 5,
        "accessories": ["air conditioning", "radio"]
    })
}

#[tokio::test]
async fn test_create_car_returns_201() {
    let response = app()
        .oneshot(json_request("POST", "/", uno()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let car: Value = json_body(response.into_body()).await;
    assert_eq!(car["model"], "Fiat Uno");
    assert_eq!(car["valuePerDay"], 89.9);
    assert_eq!(car["numberOfPassengers"], 5);
    assert_eq!(car["accessories"], json!(["air conditioning", "radio"]));
}

#[tokio::test]
async fn test_create_car_out_of_range_returns_400() {
    let mut body = uno();
    body["numberOfPassengers"] = json!(0);
    body["year"] = json!(1900);

    let response = app()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert!(error["details"]["year"].is_array());
    assert!(error["details"]["number_of_passengers"].is_array());
}

#[tokio::test]
async fn test_patch_unknown_field_returns_400() {
    let app = app();
    let car: Car = json_body(
        app.clone()
            .oneshot(json_request("POST", "/", uno()))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", car.id),
            json!({ "id": "0190b3a6-0000-7000-8000-000000000000" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_and_delete() {
    let app = app();
    let car: Car = json_body(
        app.clone()
            .oneshot(json_request("POST", "/", uno()))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", car.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(list).await.unwrap();
    let cars: Vec<Car> = json_body(response.into_body()).await;
    assert!(cars.is_empty());
}

#[tokio::test]
async fn test_delete_missing_car_returns_404() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/0190b3a6-0000-7000-8000-000000000000")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
