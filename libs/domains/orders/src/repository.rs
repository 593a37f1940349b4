use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order, UpdateOrder};

/// Repository trait for Order persistence
///
/// Implementations store what they are given; reference checks, the time
/// window and status transitions are enforced by `OrderService`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Create a new order
    async fn create(&self, input: CreateOrder) -> OrderResult<Order>;

    /// Get an order by ID
    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>>;

    /// All orders in insertion order
    async fn list(&self) -> OrderResult<Vec<Order>>;

    /// Apply a partial update to an existing order
    async fn update(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order>;

    /// Delete an order by ID
    async fn delete(&self, id: Uuid) -> OrderResult<bool>;
}

/// In-memory implementation of OrderRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order::new(input);
        self.orders.write().await.insert(order.id, order.clone());

        tracing::info!(order_id = %order.id, customer_id = %order.customer_id, car_id = %order.car_id, "Created order");
        Ok(order)
    }

    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn list(&self) -> OrderResult<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut result: Vec<Order> = orders.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(&id).ok_or(OrderError::NotFound(id))?;

        if order.apply_update(input) {
            tracing::info!(order_id = %id, status = %order.status, "Updated order");
        }
        Ok(order.clone())
    }

    async fn delete(&self, id: Uuid) -> OrderResult<bool> {
        let removed = self.orders.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(order_id = %id, "Deleted order");
        }
        Ok(removed)
    }
}
