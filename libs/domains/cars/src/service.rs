use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CarError, CarResult};
use crate::models::{Car, CreateCar, UpdateCar};
use crate::repository::CarRepository;

/// Service layer for the car fleet
pub struct CarService<R: CarRepository> {
    repository: Arc<R>,
}

impl<R: CarRepository> Clone for CarService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CarRepository> CarService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_car(&self, input: CreateCar) -> CarResult<Car> {
        input
            .validate()
            .map_err(|e| CarError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_car(&self, id: Uuid) -> CarResult<Car> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CarError::NotFound(id))
    }

    /// Existence check used by other domains that reference cars
    pub async fn car_exists(&self, id: Uuid) -> CarResult<bool> {
        Ok(self.repository.get_by_id(id).await?.is_some())
    }

    pub async fn list_cars(&self) -> CarResult<Vec<Car>> {
        self.repository.list().await
    }

    pub async fn update_car(&self, id: Uuid, input: UpdateCar) -> CarResult<Car> {
        input
            .validate()
            .map_err(|e| CarError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_car(&self, id: Uuid) -> CarResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CarError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCarRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_update_validates_before_repository() {
        let mut mock_repo = MockCarRepository::new();
        mock_repo.expect_update().never();

        let service = CarService::new(mock_repo);
        let result = service
            .update_car(
                Uuid::now_v7(),
                UpdateCar {
                    number_of_passengers: Some(0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CarError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_car() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockCarRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(2)
            .returning(|_| Ok(None));

        let service = CarService::new(mock_repo);
        assert!(matches!(service.get_car(id).await, Err(CarError::NotFound(_))));
        assert!(!service.car_exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_maps_false_to_not_found() {
        let mut mock_repo = MockCarRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = CarService::new(mock_repo);
        assert!(matches!(
            service.delete_car(Uuid::now_v7()).await,
            Err(CarError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut mock_repo = MockCarRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(CarError::Internal("pool closed".to_string())));

        let service = CarService::new(mock_repo);
        assert!(matches!(service.list_cars().await, Err(CarError::Internal(_))));
    }
}
