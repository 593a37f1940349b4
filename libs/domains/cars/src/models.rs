use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn validate_accessories(accessories: &[String]) -> Result<(), validator::ValidationError> {
    if accessories.iter().any(|a| a.trim().is_empty()) {
        return Err(validator::ValidationError::new("empty_accessory"));
    }
    Ok(())
}

/// A car available for rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub model: String,
    pub color: String,
    pub year: i32,
    /// Daily rate
    pub value_per_day: f64,
    pub number_of_passengers: i32,
    pub accessories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for adding a car to the fleet
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCar {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Fiat Uno")]
    pub model: String,

    #[validate(length(min = 1, max = 50))]
    pub color: String,

    #[validate(range(min = 1950, max = 2100))]
    pub year: i32,

    #[validate(range(exclusive_min = 0.0))]
    pub value_per_day: f64,

    #[validate(range(min = 1, max = 60))]
    pub number_of_passengers: i32,

    #[serde(default)]
    #[validate(custom(function = "validate_accessories"))]
    #[schema(example = json!(["air conditioning", "gps"]))]
    pub accessories: Vec<String>,
}

/// DTO for a partial car update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCar {
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub color: Option<String>,

    #[validate(range(min = 1950, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(exclusive_min = 0.0))]
    pub value_per_day: Option<f64>,

    #[validate(range(min = 1, max = 60))]
    pub number_of_passengers: Option<i32>,

    /// Replaces the whole list when present
    #[validate(custom(function = "validate_accessories"))]
    pub accessories: Option<Vec<String>>,
}

impl Car {
    pub fn new(input: CreateCar) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            model: input.model,
            color: input.color,
            year: input.year,
            value_per_day: input.value_per_day,
            number_of_passengers: input.number_of_passengers,
            accessories: input.accessories,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateCar) {
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(value_per_day) = update.value_per_day {
            self.value_per_day = value_per_day;
        }
        if let Some(number_of_passengers) = update.number_of_passengers {
            self.number_of_passengers = number_of_passengers;
        }
        if let Some(accessories) = update.accessories {
            self.accessories = accessories;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateCar {
        CreateCar {
            model: "Fiat Uno".to_string(),
            color: "red".to_string(),
            year: 2015,
            value_per_day: 89.9,
            number_of_passengers: 5,
            accessories: vec!["air conditioning".to_string()],
        }
    }

    #[test]
    fn test_create_car_valid() {
        assert!(create_input().validate().is_ok());
    }

    #[test]
    fn test_year_out_of_range() {
        for year in [1949, 2101] {
            let input = CreateCar {
                year,
                ..create_input()
            };
            assert!(input.validate().unwrap_err().field_errors().contains_key("year"));
        }
    }

    #[test]
    fn test_value_per_day_must_be_positive() {
        let input = CreateCar {
            value_per_day: 0.0,
            ..create_input()
        };
        assert!(
            input
                .validate()
                .unwrap_err()
                .field_errors()
                .contains_key("value_per_day")
        );
    }

    #[test]
    fn test_rejects_blank_accessory() {
        let input = CreateCar {
            accessories: vec!["gps".to_string(), "  ".to_string()],
            ..create_input()
        };
        assert!(
            input
                .validate()
                .unwrap_err()
                .field_errors()
                .contains_key("accessories")
        );
    }

    #[test]
    fn test_accessories_default_to_empty() {
        let input: CreateCar = serde_json::from_str(
            r#"{"model":"Gol","color":"white","year":2020,"valuePerDay":120.0,"numberOfPassengers":5}"#,
        )
        .unwrap();
        assert!(input.accessories.is_empty());
    }

    #[test]
    fn test_apply_update_replaces_accessories() {
        let mut car = Car::new(create_input());
        car.apply_update(UpdateCar {
            accessories: Some(vec!["gps".to_string()]),
            ..Default::default()
        });

        assert_eq!(car.accessories, vec!["gps".to_string()]);
        assert_eq!(car.model, "Fiat Uno");
    }
}
