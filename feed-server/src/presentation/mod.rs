use sqlx::PgPool;
use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::comment_service::CommentService;
use crate::application::like_service::LikeService;
use crate::application::post_service::PostService;
use crate::application::user_service::UserService;
use crate::data::repositories::postgres::comment_repository::PostgresCommentRepository;
use crate::data::repositories::postgres::like_repository::PostgresLikeRepository;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub(crate) user_service: Arc<UserService<PostgresUserRepository>>,
    pub(crate) post_service: Arc<PostService<PostgresPostRepository>>,
    pub(crate) comment_service: Arc<CommentService<PostgresCommentRepository>>,
    pub(crate) like_service: Arc<LikeService<PostgresLikeRepository>>,
    pub(crate) jwt: Arc<JwtService>,
}

impl AppState {
    /// Every repository shares the one pool handed in here.
    pub(crate) fn new(pool: PgPool, jwt: Arc<JwtService>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                PostgresUserRepository::new(pool.clone()),
                jwt.clone(),
            )),
            user_service: Arc::new(UserService::new(PostgresUserRepository::new(pool.clone()))),
            post_service: Arc::new(PostService::new(PostgresPostRepository::new(pool.clone()))),
            comment_service: Arc::new(CommentService::new(PostgresCommentRepository::new(
                pool.clone(),
            ))),
            like_service: Arc::new(LikeService::new(PostgresLikeRepository::new(pool))),
            jwt,
        }
    }
}
