pub(crate) mod comment_repository;
pub(crate) mod like_repository;
pub(crate) mod post_repository;
pub(crate) mod user_repository;

use crate::domain::error::DomainError;

/// Logs the driver error with full detail and hides it behind a storage error.
pub(crate) fn map_db_error(operation: &'static str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code();
        tracing::error!(
            operation,
            code = code.as_deref().unwrap_or("-"),
            constraint = db_err.constraint().unwrap_or("-"),
            error = %err,
            "database statement failed"
        );
    } else {
        tracing::error!(operation, error = %err, "database call failed");
    }
    DomainError::Storage(operation.to_string())
}
