use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageDto;
use crate::domain::user::{LoginRequest, RegisterRequest, UpdateUserRequest, User};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::extract::{AppJson, AppPath};
use crate::presentation::handlers::posts::PostDto;
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub(crate) struct RegisterDto {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub(crate) first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub(crate) last_name: String,
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub(crate) phone_number: String,
    #[validate(length(min = 1, max = 128, message = "password must be 1..128 chars"))]
    pub(crate) password: String,
}

/// Every field is replaced; the password is hashed again before storage.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateUserDto {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub(crate) first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub(crate) last_name: String,
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub(crate) phone_number: String,
    #[validate(length(min = 1, max = 128, message = "password must be 1..128 chars"))]
    pub(crate) password: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub(crate) struct LoginDto {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub(crate) first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub(crate) last_name: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub(crate) password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct RegisterResponseDto {
    pub(crate) message: String,
    #[serde(rename = "userId")]
    pub(crate) user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LoginResponseDto {
    pub(crate) message: String,
    pub(crate) token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone_number: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ProfileResponseDto {
    pub(crate) message: String,
    pub(crate) profile: UserDto,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            created_at: user.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/users/register",
    tag = "users",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = RegisterResponseDto),
        (status = 400, description = "Missing field"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn register(
    State(state): State<AppState>,
    AppJson(dto): AppJson<RegisterDto>,
) -> AppResult<(StatusCode, Json<RegisterResponseDto>)> {
    dto.validate()?;

    let req = RegisterRequest {
        first_name: dto.first_name,
        last_name: dto.last_name,
        phone_number: dto.phone_number,
        password: dto.password,
    };

    let user_id = state.auth_service.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Missing field or invalid password"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    AppJson(dto): AppJson<LoginDto>,
) -> AppResult<(StatusCode, Json<LoginResponseDto>)> {
    dto.validate()?;

    let req = LoginRequest {
        first_name: dto.first_name,
        last_name: dto.last_name,
        password: dto.password,
    };

    let result = state.auth_service.login(req).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            token: result.access_token,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/users/profile",
    tag = "users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile of the token holder", body = ProfileResponseDto),
        (status = 401, description = "Malformed, invalid or expired token"),
        (status = 403, description = "No token provided"),
        (status = 404, description = "User not found")
    )
)]
pub(crate) async fn profile(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> AppResult<Json<ProfileResponseDto>> {
    let user = state.auth_service.profile(auth.user_id).await?;

    Ok(Json(ProfileResponseDto {
        message: "Profile fetched successfully".to_string(),
        profile: user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserDto]),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<UserDto>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/update/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = MessageDto),
        (status = 400, description = "Missing field"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> AppResult<Json<MessageDto>> {
    dto.validate()?;

    let req = UpdateUserRequest {
        first_name: dto.first_name,
        last_name: dto.last_name,
        phone_number: dto.phone_number,
        password: dto.password,
    };
    state.user_service.update_user(id, req).await?;

    Ok(Json(MessageDto::new("User updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageDto>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(MessageDto::new("User deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/users/{id}/posts",
    tag = "users",
    params(
        ("id" = i64, Path, description = "Owning user id")
    ),
    responses(
        (status = 200, description = "Posts written by the user", body = [PostDto]),
        (status = 500, description = "Database error")
    )
)]
pub(crate) async fn posts_by_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Vec<PostDto>>> {
    let posts = state.post_service.list_posts_by_user(id).await?;
    Ok(Json(posts.into_iter().map(PostDto::from).collect()))
}
