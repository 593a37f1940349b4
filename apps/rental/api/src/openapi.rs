use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the `bearer_auth` scheme and applies it API-wide.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::builder().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAuth),
    security(("bearer_auth" = [])),
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Rental API",
        version = "0.1.0",
        description = "Car rental backend: users, customers, cars and rental orders. \
                       Everything except /v1/auth requires a bearer token."
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/auth", api = domain_users::AuthApiDoc),
        (path = "/v1/users", api = domain_users::handlers::ApiDoc),
        (path = "/v1/customers", api = domain_customers::handlers::ApiDoc),
        (path = "/v1/cars", api = domain_cars::handlers::ApiDoc),
        (path = "/v1/orders", api = domain_orders::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
