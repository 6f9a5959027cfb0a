use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::presentation::AppState;
use crate::presentation::handlers::comments::comments_for_post;
use crate::presentation::handlers::posts::{
    create_post, delete_post, get_post, list_posts, update_post,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/get/post", get(list_posts))
        .route("/posts/create", post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/posts/update/{id}", put(update_post))
        .route("/posts/delete/{id}", delete(delete_post))
        .route("/posts/{id}/comments", get(comments_for_post))
}
