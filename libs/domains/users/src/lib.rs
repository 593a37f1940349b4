//! Users Domain
//!
//! Accounts that may call the API:
//! - Sign-up and login (`auth_handlers`), issuing HS256 bearer tokens
//! - Password hashing with Argon2
//! - CRUD over users behind the auth layer (`handlers`)

pub mod auth_handlers;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use auth_handlers::{AuthApiDoc, auth_router};
pub use error::{UserError, UserResult};
pub use models::{CreateUser, LoginRequest, LoginResponse, UpdateUser, User, UserResponse};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
