use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Eleven digits, bare or as `NNN.NNN.NNN-NN`
static CPF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{11}|\d{3}\.\d{3}\.\d{3}-\d{2})$").unwrap());

static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9 ()-]+$").unwrap());

fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if !CPF.is_match(cpf) {
        return Err(validator::ValidationError::new("invalid_cpf"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), validator::ValidationError> {
    if !PHONE.is_match(phone) {
        return Err(validator::ValidationError::new("invalid_phone"));
    }
    Ok(())
}

fn validate_birth(birth: &NaiveDate) -> Result<(), validator::ValidationError> {
    if *birth > Utc::now().date_naive() {
        return Err(validator::ValidationError::new("birth_in_future"));
    }
    Ok(())
}

/// Strip the `.`/`-` formatting so a cpf is stored as eleven digits
pub fn normalize_cpf(cpf: &str) -> String {
    cpf.chars().filter(char::is_ascii_digit).collect()
}

/// A rental customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    /// Eleven digits, unformatted
    pub cpf: String,
    pub birth: NaiveDate,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a customer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "123.456.789-09")]
    pub cpf: String,

    #[validate(custom(function = "validate_birth"))]
    #[schema(example = "1990-04-21")]
    pub birth: NaiveDate,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 20), custom(function = "validate_phone"))]
    pub phone: String,
}

/// DTO for a partial customer update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<String>,

    #[validate(custom(function = "validate_birth"))]
    pub birth: Option<NaiveDate>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 20), custom(function = "validate_phone"))]
    pub phone: Option<String>,
}

impl Customer {
    pub fn new(input: CreateCustomer) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            cpf: normalize_cpf(&input.cpf),
            birth: input.birth,
            email: input.email,
            phone: input.phone,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateCustomer) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(cpf) = update.cpf {
            self.cpf = normalize_cpf(&cpf);
        }
        if let Some(birth) = update.birth {
            self.birth = birth;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        self.updated_at = Utc::now();
    }
}
