use crate::models::{Order, OrderStatus};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the orders table
///
/// `customer_id` and `car_id` carry `ON DELETE RESTRICT` foreign keys.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub start_date_time: DateTimeWithTimeZone,
    pub end_date_time: DateTimeWithTimeZone,
    pub cep: String,
    pub status: OrderStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const TAG: &str = "orders";

impl From<Model> for Order {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            car_id: model.car_id,
            start_date_time: model.start_date_time.into(),
            end_date_time: model.end_date_time.into(),
            cep: model.cep,
            status: model.status,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Order> for ActiveModel {
    fn from(order: Order) -> Self {
        ActiveModel {
            id: Set(order.id),
            customer_id: Set(order.customer_id),
            car_id: Set(order.car_id),
            start_date_time: Set(order.start_date_time.into()),
            end_date_time: Set(order.end_date_time.into()),
            cep: Set(order.cep),
            status: Set(order.status),
            created_at: Set(order.created_at.into()),
            updated_at: Set(order.updated_at.into()),
        }
    }
}
