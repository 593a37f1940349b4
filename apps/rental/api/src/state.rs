//! Shared application state.

use axum_helpers::JwtAuth;
use database::postgres::DatabaseConnection;

/// Cloned into every router that needs the pool or the token issuer.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
    pub jwt_auth: JwtAuth,
}
