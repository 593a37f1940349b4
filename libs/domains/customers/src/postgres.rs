use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{CustomerError, CustomerResult},
    models::{CreateCustomer, Customer, UpdateCustomer, normalize_cpf},
    repository::CustomerRepository,
};

pub struct PgCustomerRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn ensure_unique(
        &self,
        cpf: Option<&str>,
        email: Option<&str>,
        exclude: Option<Uuid>,
    ) -> CustomerResult<()> {
        if let Some(cpf) = cpf {
            let mut query =
                entity::Entity::find().filter(entity::Column::Cpf.eq(normalize_cpf(cpf)));
            if let Some(id) = exclude {
                query = query.filter(entity::Column::Id.ne(id));
            }
            if query.one(self.base.db()).await.map_err(db_error)?.is_some() {
                return Err(CustomerError::DuplicateCpf(cpf.to_string()));
            }
        }

        if let Some(email) = email {
            let mut query = entity::Entity::find().filter(entity::Column::Email.eq(email));
            if let Some(id) = exclude {
                query = query.filter(entity::Column::Id.ne(id));
            }
            if query.one(self.base.db()).await.map_err(db_error)?.is_some() {
                return Err(CustomerError::DuplicateEmail(email.to_string()));
            }
        }

        Ok(())
    }
}

fn db_error(err: DbErr) -> CustomerError {
    CustomerError::Internal(format!("Database error: {}", err))
}

/// A concurrent writer can still win the race past `ensure_unique`; the
/// unique index has the final say.
fn write_error(err: DbErr, customer: &Customer) -> CustomerError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains("cpf") => {
            CustomerError::DuplicateCpf(customer.cpf.clone())
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CustomerError::DuplicateEmail(customer.email.clone())
        }
        _ => db_error(err),
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        self.ensure_unique(Some(&input.cpf), Some(&input.email), None)
            .await?;

        let customer = Customer::new(input);
        let model = self
            .base
            .insert(customer.clone().into())
            .await
            .map_err(|e| write_error(e, &customer))?;

        tracing::info!(customer_id = %model.id, "Created customer");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateCustomer) -> CustomerResult<Customer> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or(CustomerError::NotFound(id))?;

        self.ensure_unique(input.cpf.as_deref(), input.email.as_deref(), Some(id))
            .await?;

        let mut customer: Customer = model.into();
        customer.apply_update(input);

        let updated = self
            .base
            .update(customer.clone().into())
            .await
            .map_err(|e| write_error(e, &customer))?;

        tracing::info!(customer_id = %id, "Updated customer");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> CustomerResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => CustomerError::InUse(id),
            _ => db_error(e),
        })?;

        if rows_affected > 0 {
            tracing::info!(customer_id = %id, "Deleted customer");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
