/// User domain types
use crate::error::{Result, RosterError};
use crate::types::{UserFields, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of `city`, in characters
pub const CITY_MAX_LEN: usize = 100;

/// A stored user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login email, unique across users
    pub email: String,

    /// Password as submitted. Never serialized into responses.
    #[serde(skip_serializing, default)]
    pub password: String,

    pub age: i64,

    pub city: Option<String>,

    pub is_active: bool,

    /// Set by storage on insert
    pub created_at: DateTime<Utc>,

    /// Refreshed by storage on every save
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Overwrite the editable fields. `id` and `password` are left alone.
    pub fn apply(&mut self, changes: UserChanges) {
        self.name = changes.name;
        self.email = changes.email;
        self.age = changes.age;
        self.city = changes.city;
        self.is_active = changes.is_active;
    }
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i64,
    pub city: Option<String>,
    pub is_active: bool,
}

impl NewUser {
    /// A new active user with no age or city
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            age: 0,
            city: None,
            is_active: true,
        }
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Build a user from submitted fields, filling defaults
    ///
    /// Missing `age` becomes 0, missing `is_active` becomes true and a missing or
    /// empty `city` stays absent. `name`, `email` and `password` are required;
    /// `name` and `email` are trimmed, the password is kept as submitted.
    pub fn from_fields(fields: UserFields) -> Result<Self> {
        let user = Self {
            name: required("name", fields.name)?,
            email: required("email", fields.email)?,
            password: fields.password.unwrap_or_default(),
            age: fields.age.unwrap_or(0),
            city: normalize_city(fields.city),
            is_active: fields.is_active.unwrap_or(true),
        };
        user.validate()?;
        Ok(user)
    }

    pub fn validate(&self) -> Result<()> {
        check_not_blank("name", &self.name)?;
        check_not_blank("email", &self.email)?;
        check_not_blank("password", &self.password)?;
        check_age(self.age)?;
        check_city(self.city.as_deref())
    }
}

/// Editable subset of a user, applied by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub city: Option<String>,
    pub is_active: bool,
}

impl UserChanges {
    /// Same defaults and rules as [`NewUser::from_fields`]; `password` is ignored.
    pub fn from_fields(fields: UserFields) -> Result<Self> {
        let changes = Self {
            name: required("name", fields.name)?,
            email: required("email", fields.email)?,
            age: fields.age.unwrap_or(0),
            city: normalize_city(fields.city),
            is_active: fields.is_active.unwrap_or(true),
        };
        changes.validate()?;
        Ok(changes)
    }

    pub fn validate(&self) -> Result<()> {
        check_not_blank("name", &self.name)?;
        check_not_blank("email", &self.email)?;
        check_age(self.age)?;
        check_city(self.city.as_deref())
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    check_not_blank(field, &value)?;
    Ok(value)
}

fn normalize_city(city: Option<String>) -> Option<String> {
    city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())
}

fn check_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn check_age(age: i64) -> Result<()> {
    if age < 0 {
        return Err(RosterError::validation("age", "must not be negative"));
    }
    Ok(())
}

fn check_city(city: Option<&str>) -> Result<()> {
    match city {
        Some(c) if c.chars().count() > CITY_MAX_LEN => Err(RosterError::validation(
            "city",
            format!("must be at most {} characters", CITY_MAX_LEN),
        )),
        _ => Ok(()),
    }
}
