use axum::{Router, middleware, routing::get};
use axum_helpers::{JwtAuth, jwt_auth_middleware};

pub mod auth;
pub mod cars;
pub mod customers;
pub mod health;
pub mod orders;
pub mod users;

/// Per-resource routers, each with its state already applied.
pub struct ApiRouters {
    pub auth: Router,
    pub users: Router,
    pub customers: Router,
    pub cars: Router,
    pub orders: Router,
}

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &crate::state::AppState) -> Router {
    let routers = ApiRouters {
        auth: auth::router(state),
        users: users::router(state),
        customers: customers::router(state),
        cars: cars::router(state),
        orders: orders::router(state),
    };
    compose(routers, state.jwt_auth.clone())
}

/// Mount everything under `/v1`. Only `/auth` is reachable without a bearer token.
pub fn compose(routers: ApiRouters, jwt_auth: JwtAuth) -> Router {
    let protected = Router::new()
        .nest("/users", routers.users)
        .nest("/customers", routers.customers)
        .nest("/cars", routers.cars)
        .nest("/orders", routers.orders)
        .layer(middleware::from_fn_with_state(jwt_auth, jwt_auth_middleware));

    let v1 = Router::new().nest("/auth", routers.auth).merge(protected);

    Router::new().nest("/v1", v1)
}

/// `/ready` with real dependency checks; merge it next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::JwtConfig;
    use chrono::{Duration, Utc};
    use domain_cars::{CarService, InMemoryCarRepository};
    use domain_customers::{CustomerService, InMemoryCustomerRepository};
    use domain_orders::{InMemoryOrderRepository, OrderService};
    use domain_users::{InMemoryUserRepository, UserService, auth_router};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let jwt = JwtAuth::new(&JwtConfig::new("routes-test-secret-with-32-characters", 600).unwrap());
        let users = UserService::new(InMemoryUserRepository::new());
        let customers = CustomerService::new(InMemoryCustomerRepository::new());
        let cars = CarService::new(InMemoryCarRepository::new());
        let orders = OrderService::new(
            InMemoryOrderRepository::new(),
            customers.clone(),
            cars.clone(),
        );

        let routers = ApiRouters {
            auth: auth_router(users.clone(), jwt.clone()),
            users: domain_users::handlers::router(users),
            customers: domain_customers::handlers::router(customers),
            cars: domain_cars::handlers::router(cars),
            orders: domain_orders::handlers::router(orders),
        };
        compose(routers, jwt)
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn login(app: &Router) -> String {
        let (status, _) = send(
            app,
            request(
                "POST",
                "/v1/auth/register",
                None,
                Some(json!({ "name": "Operator", "email": "ops@example.com", "password": "Rental123" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            app,
            request(
                "POST",
                "/v1/auth/login",
                None,
                Some(json!({ "email": "ops@example.com", "password": "Rental123" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_protected_resources_require_bearer_token() {
        let app = app();

        for uri in ["/v1/users", "/v1/customers", "/v1/cars", "/v1/orders"] {
            let (status, body) = send(&app, request("GET", uri, None, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body["code"], "UNAUTHORIZED");
        }
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let app = app();

        let (status, _) = send(&app, request("GET", "/v1/orders", Some("not.a.jwt"), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_auth_routes_are_public() {
        let app = app();

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/v1/auth/login",
                None,
                Some(json!({ "email": "nobody@example.com", "password": "Whatever1" })),
            ),
        )
        .await;
        // Reached the handler: bad credentials, not a missing token
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_ne!(body["message"], "Missing or invalid Authorization header");
    }

    #[tokio::test]
    async fn test_rental_flow_from_login_to_order() {
        let app = app();
        let token = login(&app).await;

        let (status, customer) = send(
            &app,
            request(
                "POST",
                "/v1/customers",
                Some(&token),
                Some(json!({
                    "name": "Ana Souza",
                    "cpf": "123.456.789-09",
                    "birth": "1990-04-21",
                    "email": "ana@example.com",
                    "phone": "11 98765-4321"
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, car) = send(
            &app,
            request(
                "POST",
                "/v1/cars",
                Some(&token),
                Some(json!({
                    "model": "Fiat Uno",
                    "color": "red",
                    "year": 2018,
                    "valuePerDay": 120.0,
                    "numberOfPassengers": 5,
                    "accessories": ["air conditioning"]
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let start = Utc::now() + Duration::days(1);
        let (status, order) = send(
            &app,
            request(
                "POST",
                "/v1/orders",
                Some(&token),
                Some(json!({
                    "customerId": customer["id"],
                    "carId": car["id"],
                    "startDateTime": start,
                    "endDateTime": start + Duration::days(3),
                    "cep": "01310-100"
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(order["status"], "Open");

        let uri = format!("/v1/orders/{}", order["id"].as_str().unwrap());
        let (status, updated) = send(
            &app,
            request("PATCH", &uri, Some(&token), Some(json!({ "status": "Aprovado" }))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "Approved");
        assert_eq!(updated["carId"], car["id"]);

        let (status, listed) = send(&app, request("GET", "/v1/orders", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }
}
