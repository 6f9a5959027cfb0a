use crate::domain::error::DomainError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("no token provided")]
    MissingToken,

    #[error("malformed authorization header")]
    MalformedToken,

    #[error("unauthorized access")]
    Unauthorized,
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Domain(err) => match err {
                DomainError::Validation { .. } | DomainError::InvalidCredentials => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                DomainError::Storage(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database error".to_string())
                }
                DomainError::Unexpected(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
                }
            },
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::MissingToken => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::MalformedToken | AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = ?self, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}
