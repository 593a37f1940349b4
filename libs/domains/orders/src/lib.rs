//! Orders Domain
//!
//! The rental order lifecycle: an order ties one customer to one car over a
//! time window and moves through `Open → Approved → Closed`, with
//! `Cancelled` reachable from either non-terminal state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, audit events
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────────────────────┐
//! │   Service   │ ──► │ CustomerLookup/CarLookup │
//! └──────┬──────┘     └──────────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← In-memory or Postgres
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Order, OrderStatus, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_cars::{CarService, InMemoryCarRepository};
//! use domain_customers::{CustomerService, InMemoryCustomerRepository};
//! use domain_orders::{handlers, InMemoryOrderRepository, OrderService};
//!
//! let customers = CustomerService::new(InMemoryCustomerRepository::new());
//! let cars = CarService::new(InMemoryCarRepository::new());
//! let service = OrderService::new(InMemoryOrderRepository::new(), customers, cars);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod lookup;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use lookup::{CarLookup, CustomerLookup};
pub use models::{CreateOrder, Order, OrderStatus, UpdateOrder};
pub use postgres::PgOrderRepository;
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use service::OrderService;
