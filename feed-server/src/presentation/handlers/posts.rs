use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageDto;
use crate::domain::post::{Post, PostRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::{AppJson, AppPath};

/// Body of both create and update.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub(crate) struct PostInputDto {
    #[validate(length(min = 1, max = 255, message = "title is required (max 255 chars)"))]
    pub(crate) title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub(crate) content: String,
    #[validate(range(min = 1, message = "user_id is required"))]
    pub(crate) user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostCreatedDto {
    pub(crate) message: String,
    #[serde(rename = "postId")]
    pub(crate) post_id: i64,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: post.created_at,
        }
    }
}

impl From<PostInputDto> for PostRequest {
    fn from(dto: PostInputDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            user_id: dto.user_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/get/post",
    tag = "posts",
    responses(
        (status = 200, description = "All posts", body = [PostDto]),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostDto>>> {
    let posts = state.post_service.list_posts().await?;
    Ok(Json(posts.into_iter().map(PostDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<PostDto>> {
    let post = state.post_service.get_post(id).await?;
    Ok(Json(post.into()))
}

#[utoipa::path(
    post,
    path = "/posts/create",
    tag = "posts",
    request_body = PostInputDto,
    responses(
        (status = 201, description = "Post created", body = PostCreatedDto),
        (status = 400, description = "Missing field"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    AppJson(dto): AppJson<PostInputDto>,
) -> AppResult<(StatusCode, Json<PostCreatedDto>)> {
    dto.validate()?;

    let post_id = state.post_service.create_post(dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(PostCreatedDto {
            message: "Post created successfully".to_string(),
            post_id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/posts/update/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    request_body = PostInputDto,
    responses(
        (status = 200, description = "Post updated", body = MessageDto),
        (status = 400, description = "Missing field"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<PostInputDto>,
) -> AppResult<Json<MessageDto>> {
    dto.validate()?;

    state.post_service.update_post(id, dto.into()).await?;
    Ok(Json(MessageDto::new("Post updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/posts/delete/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageDto>> {
    state.post_service.delete_post(id).await?;
    Ok(Json(MessageDto::new("Post deleted successfully")))
}
