use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid password")]
    InvalidCredentials,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub(crate) fn not_found(resource: &str) -> Self {
        DomainError::NotFound(resource.to_string())
    }
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation {
            field,
            message: "is required",
        });
    }
    Ok(value.to_string())
}

pub(crate) fn require_id(field: &'static str, value: i64) -> Result<i64, DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{DomainError, require_id, require_text};

    #[test]
    fn require_text_trims_value() {
        assert_eq!(require_text("title", "  hello ").expect("must pass"), "hello");
    }

    #[test]
    fn require_text_rejects_blank_value() {
        let err = require_text("title", "   ").expect_err("blank must fail");
        assert!(matches!(err, DomainError::Validation { field: "title", .. }));
    }

    #[test]
    fn require_id_rejects_non_positive() {
        assert!(require_id("user_id", 0).is_err());
        assert!(require_id("user_id", -3).is_err());
        assert_eq!(require_id("user_id", 7).expect("must pass"), 7);
    }
}
