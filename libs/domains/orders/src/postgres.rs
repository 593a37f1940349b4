use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};
use uuid::Uuid;

use crate::{
    entity,
    error::{OrderError, OrderResult},
    models::{CreateOrder, Order, UpdateOrder},
    repository::OrderRepository,
};

pub struct PgOrderRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_error(err: DbErr) -> OrderError {
    OrderError::Internal(format!("Database error: {}", err))
}

/// A referenced row deleted after the service's lookup surfaces here as a
/// foreign key violation.
fn write_error(err: DbErr, order: &Order) -> OrderError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) if msg.contains("customer") => {
            OrderError::CustomerNotFound(order.customer_id)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => OrderError::CarNotFound(order.car_id),
        _ => db_error(err),
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order::new(input);
        let model = self
            .base
            .insert(order.clone().into())
            .await
            .map_err(|e| write_error(e, &order))?;

        tracing::info!(order_id = %model.id, customer_id = %model.customer_id, car_id = %model.car_id, "Created order");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> OrderResult<Vec<Order>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or(OrderError::NotFound(id))?;

        let mut order: Order = model.into();
        if !order.apply_update(input) {
            return Ok(order);
        }

        let updated = self
            .base
            .update(order.clone().into())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => OrderError::NotFound(id),
                e => write_error(e, &order),
            })?;

        tracing::info!(order_id = %id, status = %updated.status, "Updated order");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> OrderResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(db_error)?;

        if rows_affected > 0 {
            tracing::info!(order_id = %id, "Deleted order");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
