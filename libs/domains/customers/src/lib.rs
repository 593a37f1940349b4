//! Customers Domain
//!
//! Registry of the people who rent cars. Orders reference customers by id,
//! so a customer with orders cannot be deleted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← In-memory or Postgres
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Customer and its DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_customers::{handlers, InMemoryCustomerRepository, CustomerService};
//!
//! let service = CustomerService::new(InMemoryCustomerRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CustomerError, CustomerResult};
pub use models::{CreateCustomer, Customer, UpdateCustomer};
pub use postgres::PgCustomerRepository;
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::CustomerService;
