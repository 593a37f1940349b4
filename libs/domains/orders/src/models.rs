use chrono::{DateTime, Utc};
use regex::Regex;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Brazilian postal code, `NNNNN-NNN` or `NNNNNNNN`
static CEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}-?\d{3}$").unwrap());

fn validate_cep(cep: &str) -> Result<(), validator::ValidationError> {
    if !CEP.is_match(cep) {
        return Err(validator::ValidationError::new("invalid_cep"));
    }
    Ok(())
}

fn check_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), validator::ValidationError> {
    if end <= start {
        let mut err = validator::ValidationError::new("end_not_after_start");
        err.message = Some("endDateTime must be after startDateTime".into());
        return Err(err);
    }
    Ok(())
}

fn validate_create_window(input: &CreateOrder) -> Result<(), validator::ValidationError> {
    check_window(input.start_date_time, input.end_date_time)
}

fn validate_update_window(input: &UpdateOrder) -> Result<(), validator::ValidationError> {
    match (input.start_date_time, input.end_date_time) {
        (Some(start), Some(end)) => check_window(start, end),
        _ => Ok(()),
    }
}

/// Rental order lifecycle
///
/// ```text
/// Open ──► Approved ──► Closed
///   │          │
///   └──────────┴──► Cancelled
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "rental_order_status")]
pub enum OrderStatus {
    #[default]
    #[sea_orm(string_value = "open")]
    #[serde(alias = "Aberto")]
    #[strum(to_string = "Open", serialize = "Aberto")]
    Open,
    #[sea_orm(string_value = "approved")]
    #[serde(alias = "Aprovado")]
    #[strum(to_string = "Approved", serialize = "Aprovado")]
    Approved,
    #[sea_orm(string_value = "cancelled")]
    #[serde(alias = "Cancelado")]
    #[strum(to_string = "Cancelled", serialize = "Cancelado")]
    Cancelled,
    #[sea_orm(string_value = "closed")]
    #[serde(alias = "Fechado")]
    #[strum(to_string = "Closed", serialize = "Fechado")]
    Closed,
}

impl OrderStatus {
    /// Re-applying the current status is always allowed.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        self == next
            || matches!(
                (self, next),
                (Open, Approved) | (Open, Cancelled) | (Approved, Closed) | (Approved, Cancelled)
            )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Closed)
    }
}

/// A rental of one car by one customer over a time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    /// Fixed at creation
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub start_date_time: DateTime<Utc>,
    /// Strictly after `startDateTime`
    pub end_date_time: DateTime<Utc>,
    #[schema(example = "01310-100")]
    pub cep: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for placing an order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_window"))]
pub struct CreateOrder {
    pub customer_id: Uuid,
    pub car_id: Uuid,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    #[validate(custom(function = "validate_cep"))]
    #[schema(example = "01310-100")]
    pub cep: String,
    /// Defaults to `Open`
    pub status: Option<OrderStatus>,
}

/// DTO for a partial order update; the customer cannot be changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = "validate_update_window"))]
pub struct UpdateOrder {
    pub car_id: Option<Uuid>,
    pub start_date_time: Option<DateTime<Utc>>,
    pub end_date_time: Option<DateTime<Utc>>,
    #[validate(custom(function = "validate_cep"))]
    pub cep: Option<String>,
    pub status: Option<OrderStatus>,
}

impl Order {
    pub fn new(input: CreateOrder) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            customer_id: input.customer_id,
            car_id: input.car_id,
            start_date_time: input.start_date_time,
            end_date_time: input.end_date_time,
            cep: input.cep,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields. `updated_at` only moves when a value
    /// actually changed, so replaying an update leaves the order untouched.
    pub fn apply_update(&mut self, update: UpdateOrder) -> bool {
        let mut changed = false;

        if let Some(car_id) = update.car_id {
            changed |= self.car_id != car_id;
            self.car_id = car_id;
        }
        if let Some(start) = update.start_date_time {
            changed |= self.start_date_time != start;
            self.start_date_time = start;
        }
        if let Some(end) = update.end_date_time {
            changed |= self.end_date_time != end;
            self.end_date_time = end;
        }
        if let Some(cep) = update.cep {
            changed |= self.cep != cep;
            self.cep = cep;
        }
        if let Some(status) = update.status {
            changed |= self.status != status;
            self.status = status;
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}
