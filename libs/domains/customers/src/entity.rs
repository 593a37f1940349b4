use crate::models::Customer;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the customers table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub birth: Date,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const TAG: &str = "customers";

impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cpf: model.cpf,
            birth: model.birth,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Customer> for ActiveModel {
    fn from(customer: Customer) -> Self {
        ActiveModel {
            id: Set(customer.id),
            name: Set(customer.name),
            cpf: Set(customer.cpf),
            birth: Set(customer.birth),
            email: Set(customer.email),
            phone: Set(customer.phone),
            created_at: Set(customer.created_at.into()),
            updated_at: Set(customer.updated_at.into()),
        }
    }
}
