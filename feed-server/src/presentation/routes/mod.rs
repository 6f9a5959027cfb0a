use axum::Router;
use axum::middleware;

use super::AppState;
use super::middleware::auth::jwt_auth_middleware;

pub(crate) mod comments;
pub(crate) mod likes;
pub(crate) mod posts;
pub(crate) mod users;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(users::router(state.clone()))
        .merge(posts::router())
        .merge(comments::router())
        .merge(likes::router(state))
}

/// Wraps `routes` in bearer-token verification. Only matched routes are
/// checked, so a wrong method still yields 405.
pub(crate) fn protected(state: &AppState, routes: Router<AppState>) -> Router<AppState> {
    routes.route_layer(middleware::from_fn_with_state(
        state.jwt.clone(),
        jwt_auth_middleware,
    ))
}
