use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::models::OrderStatus;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    /// Referenced customer does not exist; a client error, not a 404
    #[error("Customer not found: {0}")]
    CustomerNotFound(Uuid),

    /// Referenced car does not exist; a client error, not a 404
    #[error("Car not found: {0}")]
    CarNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => AppError::NotFound(format!("Order {} not found", id)),
            OrderError::CustomerNotFound(id) => {
                AppError::BadRequest(format!("Customer {} not found", id))
            }
            OrderError::CarNotFound(id) => AppError::BadRequest(format!("Car {} not found", id)),
            OrderError::Validation(msg) => AppError::BadRequest(msg),
            err @ OrderError::InvalidTransition { .. } => AppError::BadRequest(err.to_string()),
            OrderError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
