use axum::Router;
use axum::routing::{delete, get, post};

use super::protected;
use crate::presentation::AppState;
use crate::presentation::handlers::likes::{
    comment_like_count, like_comment, like_post, post_like_count, unlike_comment, unlike_post,
};

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/posts/{id}/likes", get(post_like_count))
        .route("/comments/{id}/likes", get(comment_like_count));

    let authenticated = protected(
        &state,
        Router::new()
            .route("/posts/{id}/like", post(like_post))
            .route("/posts/{id}/unlike", delete(unlike_post))
            .route("/comments/{id}/like", post(like_comment))
            .route("/comments/{id}/unlike", delete(unlike_comment)),
    );

    public.merge(authenticated)
}
