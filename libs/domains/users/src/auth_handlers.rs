//! Public sign-up and login endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, JwtAuth, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        UnauthorizedResponse,
    },
};
use serde_json::json;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, LoginRequest, LoginResponse, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

const AUTH_TAG: &str = "auth";

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, login),
    components(
        schemas(CreateUser, LoginRequest, LoginResponse, UserResponse),
        responses(
            BadRequestValidationResponse,
            ConflictResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Sign-up and token issuance")
    )
)]
pub struct AuthApiDoc;

/// Application state for auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// Router for `/register` and `/login`; mount it outside the auth layer
pub fn auth_router<R: UserRepository + 'static>(
    service: UserService<R>,
    jwt_auth: JwtAuth,
) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(AuthState { service, jwt_auth })
}

/// Sign up a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    security(()),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = state.service.create_user(input).await?;

    let user_id = user.id.to_string();
    AuditEvent::new("auth.register", Some(format!("user:{}", user.id)), AuditOutcome::Success)
        .by(Some(&user_id))
        .with_request_headers(&headers)
        .log();

    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    security(()),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>> {
    let user = match state
        .service
        .verify_credentials(&input.email, &input.password)
        .await
    {
        Ok(user) => user,
        Err(err) => {
            if matches!(err, UserError::InvalidCredentials) {
                AuditEvent::new("auth.login", None, AuditOutcome::Denied)
                    .with_request_headers(&headers)
                    .with_details(json!({ "email": input.email }))
                    .log();
            }
            return Err(err);
        }
    };

    let user_id = user.id.to_string();
    let token = state
        .jwt_auth
        .create_token(&user_id, &user.email, &user.name)
        .map_err(|e| {
            tracing::error!(error = ?e, "Failed to create access token");
            UserError::Token("Failed to create token".to_string())
        })?;

    AuditEvent::new("auth.login", Some(format!("user:{}", user.id)), AuditOutcome::Success)
        .by(Some(&user_id))
        .with_request_headers(&headers)
        .log();

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_auth.ttl_secs(),
        user,
    }))
}
