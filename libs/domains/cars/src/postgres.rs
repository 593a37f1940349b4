use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};
use uuid::Uuid;

use crate::{
    entity,
    error::{CarError, CarResult},
    models::{Car, CreateCar, UpdateCar},
    repository::CarRepository,
};

pub struct PgCarRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_error(err: DbErr) -> CarError {
    CarError::Internal(format!("Database error: {}", err))
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create(&self, input: CreateCar) -> CarResult<Car> {
        let model = self
            .base
            .insert(Car::new(input).into())
            .await
            .map_err(db_error)?;

        tracing::info!(car_id = %model.id, "Created car");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CarResult<Option<Car>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> CarResult<Vec<Car>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateCar) -> CarResult<Car> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or(CarError::NotFound(id))?;

        let mut car: Car = model.into();
        car.apply_update(input);

        let updated = self.base.update(car.into()).await.map_err(db_error)?;

        tracing::info!(car_id = %id, "Updated car");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> CarResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => CarError::InUse(id),
            _ => db_error(e),
        })?;

        if rows_affected > 0 {
            tracing::info!(car_id = %id, "Deleted car");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
