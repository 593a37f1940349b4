use crate::models::Car;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the cars table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub model: String,
    pub color: String,
    pub year: i32,
    pub value_per_day: f64,
    pub number_of_passengers: i32,
    pub accessories: Json, // JSONB array of strings
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const TAG: &str = "cars";

impl From<Model> for Car {
    fn from(model: Model) -> Self {
        let accessories: Vec<String> = serde_json::from_value(model.accessories).unwrap_or_default();

        Self {
            id: model.id,
            model: model.model,
            color: model.color,
            year: model.year,
            value_per_day: model.value_per_day,
            number_of_passengers: model.number_of_passengers,
            accessories,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Car> for ActiveModel {
    fn from(car: Car) -> Self {
        ActiveModel {
            id: Set(car.id),
            model: Set(car.model),
            color: Set(car.color),
            year: Set(car.year),
            value_per_day: Set(car.value_per_day),
            number_of_passengers: Set(car.number_of_passengers),
            accessories: Set(Json::from(car.accessories)),
            created_at: Set(car.created_at.into()),
            updated_at: Set(car.updated_at.into()),
        }
    }
}
