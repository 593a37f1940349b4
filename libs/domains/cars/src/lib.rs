//! Cars Domain
//!
//! The rental fleet. Orders reference cars by id; a car with orders cannot
//! be deleted.
//!
//! ```rust,no_run
//! use domain_cars::{handlers, CarService, InMemoryCarRepository};
//!
//! let service = CarService::new(InMemoryCarRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CarError, CarResult};
pub use models::{Car, CreateCar, UpdateCar};
pub use postgres::PgCarRepository;
pub use repository::{CarRepository, InMemoryCarRepository};
pub use service::CarService;
