use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{CreateCustomer, Customer, UpdateCustomer};
use crate::repository::CustomerRepository;

/// Service layer for Customer business logic
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_customer(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        input
            .validate()
            .map_err(|e| CustomerError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_customer(&self, id: Uuid) -> CustomerResult<Customer> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    /// Existence check used by other domains that reference customers
    pub async fn customer_exists(&self, id: Uuid) -> CustomerResult<bool> {
        Ok(self.repository.get_by_id(id).await?.is_some())
    }

    pub async fn list_customers(&self) -> CustomerResult<Vec<Customer>> {
        self.repository.list().await
    }

    pub async fn update_customer(
        &self,
        id: Uuid,
        input: UpdateCustomer,
    ) -> CustomerResult<Customer> {
        input
            .validate()
            .map_err(|e| CustomerError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_customer(&self, id: Uuid) -> CustomerResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CustomerError::NotFound(id))
        }
    }
}
