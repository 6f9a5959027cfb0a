use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::infrastructure::jwt::JwtService;
use crate::presentation::app_error::AppError;

/// Identity decoded from a verified bearer token. Handlers behind
/// `jwt_auth_middleware` take it as an extractor.
#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub(crate) user_id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

pub(crate) async fn jwt_auth_middleware(
    State(jwt): State<Arc<JwtService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;

    let claims = jwt.verify_token(token).map_err(|err| {
        debug!(error = ?err, "bearer token rejected");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.id,
        first_name: claims.first_name,
        last_name: claims.last_name,
    });

    Ok(next.run(request).await)
}

/// Expects exactly `Bearer <token>`; the scheme is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::MissingToken)?
        .to_str()
        .map_err(|_| AppError::MalformedToken)?;

    let mut parts = auth_header.split_whitespace();
    let scheme = parts.next().ok_or(AppError::MalformedToken)?;
    let token = parts.next().ok_or(AppError::MalformedToken)?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::MalformedToken);
    }

    Ok(token)
}
