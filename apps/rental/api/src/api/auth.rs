use axum::Router;
use domain_users::{PgUserRepository, UserService, auth_router};

pub fn router(state: &crate::state::AppState) -> Router {
    let service = UserService::new(PgUserRepository::new(state.db.clone()));
    auth_router(service, state.jwt_auth.clone())
}
