use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use super::MessageDto;
use crate::domain::like::LikeTarget;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::AppPath;
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LikeCountDto {
    #[serde(rename = "likeCount")]
    pub(crate) like_count: i64,
}

async fn count(state: &AppState, target: LikeTarget, id: i64) -> AppResult<Json<LikeCountDto>> {
    let like_count = state.like_service.count_likes(target, id).await?;
    Ok(Json(LikeCountDto { like_count }))
}

async fn like(
    state: &AppState,
    auth: &AuthenticatedUser,
    target: LikeTarget,
    id: i64,
    message: &str,
) -> AppResult<Json<MessageDto>> {
    state.like_service.like(target, auth.user_id, id).await?;
    Ok(Json(MessageDto::new(message)))
}

async fn unlike(
    state: &AppState,
    auth: &AuthenticatedUser,
    target: LikeTarget,
    id: i64,
    message: &str,
) -> AppResult<Json<MessageDto>> {
    state.like_service.unlike(target, auth.user_id, id).await?;
    Ok(Json(MessageDto::new(message)))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/likes",
    tag = "likes",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Number of likes on the post", body = LikeCountDto),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn post_like_count(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<LikeCountDto>> {
    count(&state, LikeTarget::Post, id).await
}

#[utoipa::path(
    post,
    path = "/posts/{id}/like",
    tag = "likes",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post liked (idempotent)", body = MessageDto),
        (status = 401, description = "Malformed, invalid or expired token"),
        (status = 403, description = "No token provided"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn like_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageDto>> {
    like(&state, &auth, LikeTarget::Post, id, "Post liked successfully").await
}

#[utoipa::path(
    delete,
    path = "/posts/{id}/unlike",
    tag = "likes",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post unliked, also when it was not liked", body = MessageDto),
        (status = 401, description = "Malformed, invalid or expired token"),
        (status = 403, description = "No token provided"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn unlike_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageDto>> {
    unlike(&state, &auth, LikeTarget::Post, id, "Post unliked successfully").await
}

#[utoipa::path(
    get,
    path = "/comments/{id}/likes",
    tag = "likes",
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Number of likes on the comment", body = LikeCountDto),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn comment_like_count(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<LikeCountDto>> {
    count(&state, LikeTarget::Comment, id).await
}

#[utoipa::path(
    post,
    path = "/comments/{id}/like",
    tag = "likes",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment liked (idempotent)", body = MessageDto),
        (status = 401, description = "Malformed, invalid or expired token"),
        (status = 403, description = "No token provided"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn like_comment(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageDto>> {
    like(&state, &auth, LikeTarget::Comment, id, "Comment liked successfully").await
}

#[utoipa::path(
    delete,
    path = "/comments/{id}/unlike",
    tag = "likes",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment unliked, also when it was not liked", body = MessageDto),
        (status = 401, description = "Malformed, invalid or expired token"),
        (status = 403, description = "No token provided"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn unlike_comment(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageDto>> {
    unlike(&state, &auth, LikeTarget::Comment, id, "Comment unliked successfully").await
}
