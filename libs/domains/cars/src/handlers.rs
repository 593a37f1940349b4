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
use crate::error::CarResult;
use crate::models::{CreateCar, Car, UpdateCar};
use crate::repository::CarRepository;
use crate::service::CarService;

/// OpenAPI documentation for the Cars API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_cars,
        create_car,
        get_car,
        update_car,
        delete_car,
    ),
    components(
        schemas(Car, CreateCar, UpdateCar),
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
        (name = TAG, description = "Rental fleet")
    )
)]
pub struct ApiDoc;

/// Create the car router with all HTTP endpoints
pub fn router<R: CarRepository + 'static>(service: CarService<R>) -> Router {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route(
            "/{id}",
            get(get_car)
                .patch(update_car)
                .delete(delete_car),
        )
        .with_state(Arc::new(service))
}

/// List all cars
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of cars", body = Vec<Car>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_cars<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
) -> CarResult<Json<Vec<Car>>> {
    let cars = service.list_cars().await?;
    Ok(Json(cars))
}

/// Add a car to the fleet
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateCar,
    responses(
        (status = 201, description = "Car created", body = Car),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateCar>,
) -> CarResult<impl IntoResponse> {
    let car = service.create_car(input).await?;

    AuditEvent::new(
        "car.create",
        Some(format!("car:{}", car.id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .with_details(json!({ "model": car.model, "year": car.year }))
    .log();

    Ok((StatusCode::CREATED, Json(car)))
}

/// Get a car by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car found", body = Car),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    UuidPath(id): UuidPath,
) -> CarResult<Json<Car>> {
    let car = service.get_car(id).await?;
    Ok(Json(car))
}

/// Partially update a car
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    request_body = UpdateCar,
    responses(
        (status = 200, description = "Car updated", body = Car),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCar>,
) -> CarResult<Json<Car>> {
    let car = service.update_car(id, input).await?;

    AuditEvent::new(
        "car.update",
        Some(format!("car:{}", id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .log();

    Ok(Json(car))
}

/// Delete a car
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_car<R: CarRepository>(
    State(service): State<Arc<CarService<R>>>,
    claims: OptionalClaims,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> CarResult<impl IntoResponse> {
    service.delete_car(id).await?;

    AuditEvent::new(
        "car.delete",
        Some(format!("car:{}", id)),
        AuditOutcome::Success,
    )
    .by(claims.user_id())
    .with_request_headers(&headers)
    .log();

    Ok(StatusCode::NO_CONTENT)
}
