use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serializer;
use uuid::Uuid;

use error::{Error, Result};
use schema::users;

/// `users.name` is `varchar(255)`.
pub const NAME_MAX_LENGTH: usize = 255;

/// `users.balance` is `numeric(12, 2)`.
const BALANCE_SCALE: i64 = 2;
const BALANCE_LIMIT: i64 = 10_000_000_000;

#[derive(Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
#[table_name = "users"]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub balance: BigDecimal,
    pub updated_at: NaiveDateTime,
    pub created_at: NaiveDate,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Account {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug)]
pub struct NewAccount {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub balance: BigDecimal,
}

impl NewAccount {
    pub fn new<N, U>(name: N, username: U, balance: Option<BigDecimal>) -> Self
    where
        N: Into<String>,
        U: Into<String>,
    {
        NewAccount {
            id: Uuid::new_v4(),
            name: name.into(),
            username: username.into(),
            balance: balance.unwrap_or_else(|| BigDecimal::from(0).with_scale(BALANCE_SCALE)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_username(&self.username)?;
        validate_balance(&self.balance)
    }
}

/// Absent fields keep their stored value.
#[derive(AsChangeset, Clone, Debug, Default)]
#[table_name = "users"]
pub struct AccountChanges {
    pub name: Option<String>,
    pub username: Option<String>,
    pub balance: Option<BigDecimal>,
}

impl AccountChanges {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        if let Some(ref username) = self.username {
            validate_username(username)?;
        }
        if let Some(ref balance) = self.balance {
            validate_balance(balance)?;
        }
        Ok(())
    }

    /// Brings `balance` to the column's scale. Call after `validate`.
    pub fn normalized(self) -> Self {
        AccountChanges {
            balance: self.balance.as_ref().map(normalize_balance),
            ..self
        }
    }
}

/// `1E+2` carries a negative scale, which `numeric` does not accept on the
/// wire. Values that passed `validate_balance` lose nothing here, so this
/// runs on the write path after validation.
pub fn normalize_balance(balance: &BigDecimal) -> BigDecimal {
    balance.with_scale(BALANCE_SCALE)
}

fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::constraint(format!("{} must not be empty", field)));
    }

    if value.contains('\0') {
        return Err(Error::constraint(format!(
            "{} must not contain NUL characters",
            field
        )));
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    validate_text("name", name)?;

    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(Error::constraint(format!(
            "name must not be longer than {} characters",
            NAME_MAX_LENGTH
        )));
    }

    Ok(())
}

fn validate_username(username: &str) -> Result<()> {
    validate_text("username", username)
}

fn validate_balance(balance: &BigDecimal) -> Result<()> {
    if balance.with_scale(BALANCE_SCALE) != *balance {
        return Err(Error::constraint(format!(
            "balance must not have more than {} fractional digits",
            BALANCE_SCALE
        )));
    }

    if balance.abs() >= BigDecimal::from(BALANCE_LIMIT) {
        return Err(Error::constraint("balance is out of range"));
    }

    Ok(())
}

fn serialize_decimal<S>(value: &BigDecimal, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}
