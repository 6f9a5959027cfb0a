use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<i64, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
    async fn list_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError>;
    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError>;
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
}
