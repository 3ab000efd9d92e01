//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::age::age_on;
use crate::errors::{AppError, AppResult};

/// Date format accepted for the `dob` field
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub dob: NaiveDate,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Date of birth in YYYY-MM-DD format
    #[validate(custom(function = "validate_dob"))]
    #[schema(example = "1990-05-20")]
    pub dob: String,
}

/// User update data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// New date of birth in YYYY-MM-DD format
    #[validate(custom(function = "validate_dob"))]
    #[schema(example = "1985-11-02")]
    pub dob: String,
}

impl CreateUserRequest {
    /// Parse the `dob` field.
    pub fn dob(&self) -> AppResult<NaiveDate> {
        parse_dob(&self.dob)
            .ok_or_else(|| AppError::validation("dob must be in YYYY-MM-DD format"))
    }
}

impl UpdateUserRequest {
    /// Parse the `dob` field.
    pub fn dob(&self) -> AppResult<NaiveDate> {
        parse_dob(&self.dob)
            .ok_or_else(|| AppError::validation("dob must be in YYYY-MM-DD format"))
    }
}

/// Parse a date of birth string in YYYY-MM-DD format
pub fn parse_dob(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DOB_FORMAT).ok()
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("name_required");
        err.message = Some("name required".into());
        return Err(err);
    }
    Ok(())
}

fn validate_dob(dob: &str) -> Result<(), ValidationError> {
    if parse_dob(dob).is_none() {
        let mut err = ValidationError::new("dob_format");
        err.message = Some("dob must be in YYYY-MM-DD format".into());
        return Err(err);
    }
    Ok(())
}

/// User response (age derived at response time, never stored)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Age in whole years, computed from dob
    #[schema(example = 34)]
    pub age: i32,
}

impl UserResponse {
    /// Shape a user for the wire, computing age as of `today`.
    pub fn new(user: User, today: NaiveDate) -> Self {
        let age = age_on(user.dob, today);
        Self {
            id: user.id,
            name: user.name,
            dob: user.dob,
            age,
        }
    }
}
