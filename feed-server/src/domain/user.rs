use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, require_text};

const MAX_PASSWORD_LEN: usize = 128;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RegisterRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone_number: String,
    pub(crate) password: String,
}

impl RegisterRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: require_text("first_name", &self.first_name)?,
            last_name: require_text("last_name", &self.last_name)?,
            phone_number: require_text("phone_number", &self.phone_number)?,
            password: validate_password(self.password)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        if self.password.is_empty() {
            return Err(DomainError::Validation {
                field: "password",
                message: "is required",
            });
        }
        Ok(Self {
            first_name: require_text("first_name", &self.first_name)?,
            last_name: require_text("last_name", &self.last_name)?,
            password: self.password,
        })
    }
}

/// Full replacement of a user's editable fields. The password is re-hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UpdateUserRequest {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone_number: String,
    pub(crate) password: String,
}

impl UpdateUserRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: require_text("first_name", &self.first_name)?,
            last_name: require_text("last_name", &self.last_name)?,
            phone_number: require_text("phone_number", &self.phone_number)?,
            password: validate_password(self.password)?,
        })
    }
}

/// A persisted user as seen by callers. Password material never leaves the data layer.
#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone_number: String,
    pub(crate) created_at: DateTime<Utc>,
}

// Passwords are not trimmed: surrounding whitespace is part of the secret.
fn validate_password(password: String) -> Result<String, DomainError> {
    if password.trim().is_empty() {
        return Err(DomainError::Validation {
            field: "password",
            message: "is required",
        });
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(DomainError::Validation {
            field: "password",
            message: "must be at most 128 chars",
        });
    }
    Ok(password)
}
