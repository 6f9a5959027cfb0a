use axum::Router;
use axum::routing::{delete, get, post, put};

use super::protected;
use crate::presentation::AppState;
use crate::presentation::handlers::comments::comments_by_user;
use crate::presentation::handlers::users::{
    delete_user, get_user, list_users, login, posts_by_user, profile, register, update_user,
};

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/users", get(list_users))
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/{id}", get(get_user))
        .route("/users/update/{id}", put(update_user))
        .route("/users/delete/{id}", delete(delete_user))
        .route("/users/{id}/posts", get(posts_by_user))
        .route("/users/{id}/comments", get(comments_by_user));

    let authenticated = protected(&state, Router::new().route("/users/profile", get(profile)));

    public.merge(authenticated)
}
