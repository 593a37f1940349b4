use axum::Router;
use domain_cars::{CarService, PgCarRepository};
use domain_customers::{CustomerService, PgCustomerRepository};
use domain_orders::{OrderService, PgOrderRepository, handlers};

/// Orders resolve their customer and car through the sibling services on the same pool.
pub fn router(state: &crate::state::AppState) -> Router {
    let customers = CustomerService::new(PgCustomerRepository::new(state.db.clone()));
    let cars = CarService::new(PgCarRepository::new(state.db.clone()));
    let repository = PgOrderRepository::new(state.db.clone());

    handlers::router(OrderService::new(repository, customers, cars))
}
