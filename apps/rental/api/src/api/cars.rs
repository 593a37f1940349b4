use axum::Router;
use domain_cars::{CarService, PgCarRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgCarRepository::new(state.db.clone());
    handlers::router(CarService::new(repository))
}
