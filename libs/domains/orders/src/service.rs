use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{OrderError, OrderResult};
use crate::lookup::{CarLookup, CustomerLookup};
use crate::models::{CreateOrder, Order, UpdateOrder};
use crate::repository::OrderRepository;

/// Order lifecycle rules: reference checks, the rental window and status
/// transitions. Each operation ends in a single repository call.
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
    customers: Arc<dyn CustomerLookup>,
    cars: Arc<dyn CarLookup>,
}

impl<R: OrderRepository> Clone for OrderService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            customers: Arc::clone(&self.customers),
            cars: Arc::clone(&self.cars),
        }
    }
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(
        repository: R,
        customers: impl CustomerLookup + 'static,
        cars: impl CarLookup + 'static,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            customers: Arc::new(customers),
            cars: Arc::new(cars),
        }
    }

    /// Place an order for an existing customer and car
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<Order> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        self.ensure_customer(input.customer_id).await?;
        self.ensure_car(input.car_id).await?;

        self.repository.create(input).await
    }

    pub async fn get_order(&self, id: Uuid) -> OrderResult<Order> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    pub async fn list_orders(&self) -> OrderResult<Vec<Order>> {
        self.repository.list().await
    }

    /// Partially update an order
    ///
    /// The merged window must still end after it starts, a new car must
    /// exist, and a status change must follow the transition table.
    pub async fn update_order(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        let existing = self.get_order(id).await?;

        if let Some(car_id) = input.car_id {
            if car_id != existing.car_id {
                self.ensure_car(car_id).await?;
            }
        }

        let start = input.start_date_time.unwrap_or(existing.start_date_time);
        let end = input.end_date_time.unwrap_or(existing.end_date_time);
        if end <= start {
            return Err(OrderError::Validation(
                "endDateTime must be after startDateTime".to_string(),
            ));
        }

        if let Some(next) = input.status {
            if !existing.status.can_transition_to(next) {
                return Err(OrderError::InvalidTransition {
                    from: existing.status,
                    to: next,
                });
            }
        }

        self.repository.update(id, input).await
    }

    pub async fn delete_order(&self, id: Uuid) -> OrderResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(OrderError::NotFound(id))
        }
    }

    async fn ensure_customer(&self, id: Uuid) -> OrderResult<()> {
        if !self.customers.customer_exists(id).await? {
            return Err(OrderError::CustomerNotFound(id));
        }
        Ok(())
    }

    async fn ensure_car(&self, id: Uuid) -> OrderResult<()> {
        if !self.cars.car_exists(id).await? {
            return Err(OrderError::CarNotFound(id));
        }
        Ok(())
    }
}
