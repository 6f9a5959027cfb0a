use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::MessageDto;
use crate::presentation::handlers::comments::{
    CommentCreatedDto, CommentDto, CreateCommentDto, PostCommentDto, UpdateCommentDto,
    UserCommentDto,
};
use crate::presentation::handlers::likes::LikeCountDto;
use crate::presentation::handlers::posts::{PostCreatedDto, PostDto, PostInputDto};
use crate::presentation::handlers::users::{
    LoginDto, LoginResponseDto, ProfileResponseDto, RegisterDto, RegisterResponseDto,
    UpdateUserDto, UserDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::users::register,
        crate::presentation::handlers::users::login,
        crate::presentation::handlers::users::profile,
        crate::presentation::handlers::users::list_users,
        crate::presentation::handlers::users::get_user,
        crate::presentation::handlers::users::update_user,
        crate::presentation::handlers::users::delete_user,
        crate::presentation::handlers::users::posts_by_user,
        crate::presentation::handlers::posts::list_posts,
        crate::presentation::handlers::posts::get_post,
        crate::presentation::handlers::posts::create_post,
        crate::presentation::handlers::posts::update_post,
        crate::presentation::handlers::posts::delete_post,
        crate::presentation::handlers::comments::list_comments,
        crate::presentation::handlers::comments::get_comment,
        crate::presentation::handlers::comments::create_comment,
        crate::presentation::handlers::comments::comments_for_post,
        crate::presentation::handlers::comments::comments_by_user,
        crate::presentation::handlers::comments::update_comment,
        crate::presentation::handlers::comments::delete_comment,
        crate::presentation::handlers::likes::post_like_count,
        crate::presentation::handlers::likes::like_post,
        crate::presentation::handlers::likes::unlike_post,
        crate::presentation::handlers::likes::comment_like_count,
        crate::presentation::handlers::likes::like_comment,
        crate::presentation::handlers::likes::unlike_comment
    ),
    components(
        schemas(
            MessageDto,
            RegisterDto,
            UpdateUserDto,
            LoginDto,
            RegisterResponseDto,
            LoginResponseDto,
            ProfileResponseDto,
            UserDto,
            PostInputDto,
            PostDto,
            PostCreatedDto,
            CreateCommentDto,
            UpdateCommentDto,
            CommentDto,
            PostCommentDto,
            UserCommentDto,
            CommentCreatedDto,
            LikeCountDto
        )
    ),
    tags(
        (name = "users", description = "Registration, login and user records"),
        (name = "posts", description = "Post endpoints"),
        (name = "comments", description = "Comment endpoints"),
        (name = "likes", description = "Likes on posts and comments")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/users/register",
            "/users/login",
            "/users/profile",
            "/users/{id}/comments",
            "/get/post",
            "/posts/{id}/like",
            "/comments/{id}/unlike",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing {expected}"
            );
        }
        assert!(
            doc.components
                .as_ref()
                .is_some_and(|c| c.security_schemes.contains_key("bearer_auth"))
        );
    }
}
