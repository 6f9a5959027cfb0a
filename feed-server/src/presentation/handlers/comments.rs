use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageDto;
use crate::domain::comment::{
    Comment, CreateCommentRequest, PostComment, UpdateCommentRequest, UserComment,
};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::{AppJson, AppPath};

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub(crate) struct CreateCommentDto {
    #[validate(length(min = 1, message = "comment is required"))]
    pub(crate) comment: String,
    #[validate(range(min = 1, message = "user_id is required"))]
    pub(crate) user_id: i64,
    #[validate(range(min = 1, message = "post_id is required"))]
    pub(crate) post_id: i64,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateCommentDto {
    #[validate(length(min = 1, message = "comment is required"))]
    pub(crate) comment: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentDto {
    pub(crate) id: i64,
    pub(crate) comment: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

/// Comment on a post together with its author's name.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostCommentDto {
    pub(crate) id: i64,
    pub(crate) comment: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

/// Comment by a user together with the commented post's title.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserCommentDto {
    pub(crate) id: i64,
    pub(crate) comment: String,
    pub(crate) title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentCreatedDto {
    pub(crate) message: String,
    #[serde(rename = "commentId")]
    pub(crate) comment_id: i64,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            comment: comment.comment,
            user_id: comment.user_id,
            post_id: comment.post_id,
            created_at: comment.created_at,
        }
    }
}

impl From<PostComment> for PostCommentDto {
    fn from(comment: PostComment) -> Self {
        Self {
            id: comment.id,
            comment: comment.comment,
            first_name: comment.first_name,
            last_name: comment.last_name,
        }
    }
}

impl From<UserComment> for UserCommentDto {
    fn from(comment: UserComment) -> Self {
        Self {
            id: comment.id,
            comment: comment.comment,
            title: comment.title,
        }
    }
}

#[utoipa::path(
    get,
    path = "/get/comments",
    tag = "comments",
    responses(
        (status = 200, description = "All comments", body = [CommentDto]),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn list_comments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CommentDto>>> {
    let comments = state.comment_service.list_comments().await?;
    Ok(Json(comments.into_iter().map(CommentDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "The comment", body = CommentDto),
        (status = 404, description = "Comment not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn get_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<CommentDto>> {
    let comment = state.comment_service.get_comment(id).await?;
    Ok(Json(comment.into()))
}

#[utoipa::path(
    post,
    path = "/comments/create",
    tag = "comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentCreatedDto),
        (status = 400, description = "Missing field"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn create_comment(
    State(state): State<AppState>,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> AppResult<(StatusCode, Json<CommentCreatedDto>)> {
    dto.validate()?;

    let req = CreateCommentRequest {
        comment: dto.comment,
        user_id: dto.user_id,
        post_id: dto.post_id,
    };
    let comment_id = state.comment_service.create_comment(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedDto {
            message: "Comment created successfully".to_string(),
            comment_id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Comments on the post", body = [PostCommentDto]),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn comments_for_post(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Vec<PostCommentDto>>> {
    let comments = state.comment_service.comments_for_post(id).await?;
    Ok(Json(comments.into_iter().map(PostCommentDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}/comments",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Comments written by the user", body = [UserCommentDto]),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn comments_by_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Vec<UserCommentDto>>> {
    let comments = state.comment_service.comments_by_user(id).await?;
    Ok(Json(comments.into_iter().map(UserCommentDto::from).collect()))
}

#[utoipa::path(
    put,
    path = "/comments/update/{id}",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = MessageDto),
        (status = 400, description = "Missing comment text"),
        (status = 404, description = "Comment not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn update_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateCommentDto>,
) -> AppResult<Json<MessageDto>> {
    dto.validate()?;

    let req = UpdateCommentRequest {
        comment: dto.comment,
    };
    state.comment_service.update_comment(id, req).await?;
    Ok(Json(MessageDto::new("Comment updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/comments/delete/{id}",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 404, description = "Comment not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn delete_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageDto>> {
    state.comment_service.delete_comment(id).await?;
    Ok(Json(MessageDto::new("Comment deleted successfully")))
}
