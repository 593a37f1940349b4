use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CarError, CarResult};
use crate::models::{Car, CreateCar, UpdateCar};

/// Repository trait for Car persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Create a new car
    async fn create(&self, input: CreateCar) -> CarResult<Car>;

    /// Get a car by ID
    async fn get_by_id(&self, id: Uuid) -> CarResult<Option<Car>>;

    /// List the whole fleet, oldest first
    async fn list(&self) -> CarResult<Vec<Car>>;

    /// Update an existing car
    async fn update(&self, id: Uuid, input: UpdateCar) -> CarResult<Car>;

    /// Delete a car by ID
    async fn delete(&self, id: Uuid) -> CarResult<bool>;
}

/// In-memory implementation of CarRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCarRepository {
    cars: Arc<RwLock<HashMap<Uuid, Car>>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, input: CreateCar) -> CarResult<Car> {
        let car = Car::new(input);
        self.cars.write().await.insert(car.id, car.clone());

        tracing::info!(car_id = %car.id, "Created car");
        Ok(car)
    }

    async fn get_by_id(&self, id: Uuid) -> CarResult<Option<Car>> {
        Ok(self.cars.read().await.get(&id).cloned())
    }

    async fn list(&self) -> CarResult<Vec<Car>> {
        let cars = self.cars.read().await;
        let mut result: Vec<Car> = cars.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateCar) -> CarResult<Car> {
        let mut cars = self.cars.write().await;
        let car = cars.get_mut(&id).ok_or(CarError::NotFound(id))?;
        car.apply_update(input);

        tracing::info!(car_id = %id, "Updated car");
        Ok(car.clone())
    }

    async fn delete(&self, id: Uuid) -> CarResult<bool> {
        let removed = self.cars.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(car_id = %id, "Deleted car");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(model: &str) -> CreateCar {
        CreateCar {
            model: model.to_string(),
            color: "silver".to_string(),
            year: 2019,
            value_per_day: 150.0,
            number_of_passengers: 5,
            accessories: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let repo = InMemoryCarRepository::new();
        let uno = repo.create(create_input("Uno")).await.unwrap();
        let gol = repo.create(create_input("Gol")).await.unwrap();

        let models: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.model)
            .collect();
        assert_eq!(models, vec!["Uno", "Gol"]);

        assert!(repo.delete(uno.id).await.unwrap());
        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, gol.id);
    }

    #[tokio::test]
    async fn test_update_partial() {
        let repo = InMemoryCarRepository::new();
        let car = repo.create(create_input("Uno")).await.unwrap();

        let updated = repo
            .update(
                car.id,
                UpdateCar {
                    value_per_day: Some(99.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.value_per_day, 99.5);
        assert_eq!(updated.model, "Uno");
        assert_eq!(updated.created_at, car.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let repo = InMemoryCarRepository::new();
        let result = repo.update(Uuid::now_v7(), UpdateCar::default()).await;
        assert!(matches!(result, Err(CarError::NotFound(_))));
    }
}
