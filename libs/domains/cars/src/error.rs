use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CarError {
    #[error("Car not found: {0}")]
    NotFound(Uuid),

    #[error("Car {0} is referenced by existing orders")]
    InUse(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CarResult<T> = Result<T, CarError>;

impl From<CarError> for AppError {
    fn from(err: CarError) -> Self {
        match err {
            CarError::NotFound(id) => AppError::NotFound(format!("Car {} not found", id)),
            CarError::InUse(id) => {
                AppError::Conflict(format!("Car {} is referenced by existing orders", id))
            }
            CarError::Validation(msg) => AppError::BadRequest(msg),
            CarError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CarError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
