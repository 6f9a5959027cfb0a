use async_trait::async_trait;

use crate::domain::comment::{Comment, PostComment, UserComment};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct NewComment {
    pub(crate) comment: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
}

#[async_trait]
pub(crate) trait CommentRepository: Send + Sync {
    async fn create_comment(&self, input: NewComment) -> Result<i64, DomainError>;
    async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError>;
    async fn list_comments(&self) -> Result<Vec<Comment>, DomainError>;
    async fn list_comments_for_post(&self, post_id: i64) -> Result<Vec<PostComment>, DomainError>;
    async fn list_comments_by_user(&self, user_id: i64) -> Result<Vec<UserComment>, DomainError>;
    async fn update_comment(&self, id: i64, comment: &str) -> Result<bool, DomainError>;
    async fn delete_comment(&self, id: i64) -> Result<bool, DomainError>;
}
