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
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::TAG;
use crate::error::CustomerResult;
use crate::models::{CreateCustomer, Customer, UpdateCustomer};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

/// OpenAPI documentation for the Customers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_customers,
        create_customer,
        get_customer,
        update_customer,
        delete_customer,
    ),
    components(
        schemas(Customer, CreateCustomer, UpdateCustomer),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Customer registry")
    )
)]
pub struct ApiDoc;

/// Create the customer router with all HTTP endpoints
pub fn router<R: CustomerRepository + 'static>(service: CustomerService<R>) -> Router {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer)
                .patch(update_customer)
                .delete(delete_customer),
        )
        .with_state(Arc::new(service))
}

/// List all customers
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of customers", body = Vec<Customer>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_customers<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
) -> CustomerResult<Json<Vec<Customer>>> {
    let customers = service.list_customers().await?;
    Ok(Json(customers))
}

/// Register a customer
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateCustomer>,
) -> CustomerResult<impl IntoResponse> {
    let customer = service.create_customer(input).await?;

    AuditEvent::new(
        "customer.create",
        Some(format!("customer:{}", customer.id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .with_details(json!({ "email": customer.email }))
    .log();

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<Json<Customer>> {
    let customer = service.get_customer(id).await?;
    Ok(Json(customer))
}

/// Partially update a customer
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCustomer>,
) -> CustomerResult<Json<Customer>> {
    let customer = service.update_customer(id, input).await?;

    AuditEvent::new(
        "customer.update",
        Some(format!("customer:{}", id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .log();

    Ok(Json(customer))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> CustomerResult<impl IntoResponse> {
    service.delete_customer(id).await?;

    AuditEvent::new(
        "customer.delete",
        Some(format!("customer:{}", id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .log();

    Ok(StatusCode::NO_CONTENT)
}
