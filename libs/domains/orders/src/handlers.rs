use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, OptionalClaims, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::TAG;
use crate::error::OrderResult;
use crate::models::{CreateOrder, Order, OrderStatus, UpdateOrder};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for the Orders API
#[derive(OpenApi)]
#[openapi(
    paths(list_orders, create_order, get_order, update_order, delete_order),
    components(
        schemas(Order, CreateOrder, UpdateOrder, OrderStatus),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Rental order lifecycle")
    )
)]
pub struct ApiDoc;

/// Create the order router with all HTTP endpoints
pub fn router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/{id}",
            get(get_order).patch(update_order).delete(delete_order),
        )
        .with_state(Arc::new(service))
}

/// List all orders in the order they were placed
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of orders", body = Vec<Order>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_orders<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
) -> OrderResult<Json<Vec<Order>>> {
    let orders = service.list_orders().await?;
    Ok(Json(orders))
}

/// Place a new order
///
/// The customer and car must exist; an unknown reference is a 400.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<impl IntoResponse> {
    let order = service.create_order(input).await?;

    AuditEvent::new(
        "order.create",
        Some(format!("order:{}", order.id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .with_details(json!({
        "customer_id": order.customer_id,
        "car_id": order.car_id,
        "status": order.status.to_string(),
    }))
    .log();

    Ok((StatusCode::CREATED, Json(order)))
}

/// Get an order by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Json<Order>> {
    let order = service.get_order(id).await?;
    Ok(Json(order))
}

/// Partially update an order
///
/// `customerId` is immutable and rejected if sent.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateOrder>,
) -> OrderResult<Json<Order>> {
    let requested_status = input.status;
    let order = service.update_order(id, input).await?;

    AuditEvent::new(
        "order.update",
        Some(format!("order:{}", id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .with_details(json!({
        "status": requested_status.map(|s| s.to_string()),
    }))
    .log();

    Ok(Json(order))
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> OrderResult<impl IntoResponse> {
    service.delete_order(id).await?;

    AuditEvent::new(
        "order.delete",
        Some(format!("order:{}", id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .log();

    Ok(StatusCode::NO_CONTENT)
}
