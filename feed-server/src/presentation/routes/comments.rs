use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::presentation::AppState;
use crate::presentation::handlers::comments::{
    create_comment, delete_comment, get_comment, list_comments, update_comment,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/get/comments", get(list_comments))
        .route("/comments/create", post(create_comment))
        .route("/comments/{id}", get(get_comment))
        .route("/comments/update/{id}", put(update_comment))
        .route("/comments/delete/{id}", delete(delete_comment))
}
