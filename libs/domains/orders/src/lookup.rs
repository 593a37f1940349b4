//! Existence checks against the customer and car registries.
//!
//! The order service only needs to know whether a referenced row exists, so
//! it depends on these traits instead of the sibling services directly.

use async_trait::async_trait;
use domain_cars::{CarRepository, CarService};
use domain_customers::{CustomerRepository, CustomerService};
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn customer_exists(&self, id: Uuid) -> OrderResult<bool>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarLookup: Send + Sync {
    async fn car_exists(&self, id: Uuid) -> OrderResult<bool>;
}

#[async_trait]
impl<R: CustomerRepository + 'static> CustomerLookup for CustomerService<R> {
    async fn customer_exists(&self, id: Uuid) -> OrderResult<bool> {
        CustomerService::customer_exists(self, id)
            .await
            .map_err(|e| OrderError::Internal(format!("Customer lookup failed: {}", e)))
    }
}

#[async_trait]
impl<R: CarRepository + 'static> CarLookup for CarService<R> {
    async fn car_exists(&self, id: Uuid) -> OrderResult<bool> {
        CarService::car_exists(self, id)
            .await
            .map_err(|e| OrderError::Internal(format!("Car lookup failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_cars::{CreateCar, InMemoryCarRepository};
    use domain_customers::{CreateCustomer, InMemoryCustomerRepository};

    #[tokio::test]
    async fn test_customer_service_lookup() {
        let service = CustomerService::new(InMemoryCustomerRepository::new());
        let customer = service
            .create_customer(CreateCustomer {
                name: "Ana".to_string(),
                cpf: "12345678909".to_string(),
                birth: NaiveDate::from_ymd_opt(1990, 4, 21).unwrap(),
                email: "ana@example.com".to_string(),
                phone: "11 98765-4321".to_string(),
            })
            .await
            .unwrap();

        let lookup: &dyn CustomerLookup = &service;
        assert!(lookup.customer_exists(customer.id).await.unwrap());
        assert!(!lookup.customer_exists(Uuid::now_v7()).await.unwrap());
    }

    #[tokio::test]
    async fn test_car_service_lookup() {
        let service = CarService::new(InMemoryCarRepository::new());
        let car = service
            .create_car(CreateCar {
                model: "Uno".to_string(),
                color: "red".to_string(),
                year: 2015,
                value_per_day: 90.0,
                number_of_passengers: 5,
                accessories: vec![],
            })
            .await
            .unwrap();

        let lookup: &dyn CarLookup = &service;
        assert!(lookup.car_exists(car.id).await.unwrap());
        assert!(!lookup.car_exists(Uuid::now_v7()).await.unwrap());
    }
}
