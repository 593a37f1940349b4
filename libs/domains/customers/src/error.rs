use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(Uuid),

    #[error("Customer with cpf '{0}' already exists")]
    DuplicateCpf(String),

    #[error("Customer with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Customer {0} is referenced by existing orders")]
    InUse(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CustomerResult<T> = Result<T, CustomerError>;

/// Convert CustomerError to AppError for standardized error responses
impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(id) => AppError::NotFound(format!("Customer {} not found", id)),
            CustomerError::DuplicateCpf(cpf) => {
                AppError::Conflict(format!("Customer with cpf '{}' already exists", cpf))
            }
            CustomerError::DuplicateEmail(email) => {
                AppError::Conflict(format!("Customer with email '{}' already exists", email))
            }
            CustomerError::InUse(id) => AppError::Conflict(format!(
                "Customer {} is referenced by existing orders",
                id
            )),
            CustomerError::Validation(msg) => AppError::BadRequest(msg),
            CustomerError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
