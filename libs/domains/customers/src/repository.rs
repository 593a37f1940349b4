use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{CreateCustomer, Customer, UpdateCustomer, normalize_cpf};

/// Repository trait for Customer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Create a new customer
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer>;

    /// Get a customer by ID
    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>>;

    /// List all customers, oldest first
    async fn list(&self) -> CustomerResult<Vec<Customer>>;

    /// Update an existing customer
    async fn update(&self, id: Uuid, input: UpdateCustomer) -> CustomerResult<Customer>;

    /// Delete a customer by ID
    async fn delete(&self, id: Uuid) -> CustomerResult<bool>;
}

/// In-memory implementation of CustomerRepository (for development/testing)
///
/// Does not know about orders, so deletes are never rejected as in use.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_unique(
    customers: &HashMap<Uuid, Customer>,
    cpf: Option<&str>,
    email: Option<&str>,
    exclude: Option<Uuid>,
) -> CustomerResult<()> {
    for existing in customers.values().filter(|c| Some(c.id) != exclude) {
        if let Some(cpf) = cpf {
            if existing.cpf == normalize_cpf(cpf) {
                return Err(CustomerError::DuplicateCpf(cpf.to_string()));
            }
        }
        if let Some(email) = email {
            if existing.email == email {
                return Err(CustomerError::DuplicateEmail(email.to_string()));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        let mut customers = self.customers.write().await;
        check_unique(&customers, Some(&input.cpf), Some(&input.email), None)?;

        let customer = Customer::new(input);
        customers.insert(customer.id, customer.clone());

        tracing::info!(customer_id = %customer.id, "Created customer");
        Ok(customer)
    }

    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        let customers = self.customers.read().await;
        let mut result: Vec<Customer> = customers.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateCustomer) -> CustomerResult<Customer> {
        let mut customers = self.customers.write().await;
        check_unique(
            &customers,
            input.cpf.as_deref(),
            input.email.as_deref(),
            Some(id),
        )?;

        let customer = customers
            .get_mut(&id)
            .ok_or(CustomerError::NotFound(id))?;
        customer.apply_update(input);

        tracing::info!(customer_id = %id, "Updated customer");
        Ok(customer.clone())
    }

    async fn delete(&self, id: Uuid) -> CustomerResult<bool> {
        let mut customers = self.customers.write().await;
        let removed = customers.remove(&id).is_some();
        if removed {
            tracing::info!(customer_id = %id, "Deleted customer");
        }
        Ok(removed)
    }
}
