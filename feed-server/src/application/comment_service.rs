use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::domain::comment::{
    Comment, CreateCommentRequest, PostComment, UpdateCommentRequest, UserComment,
};
use crate::domain::error::DomainError;

pub(crate) struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_comment(
        &self,
        req: CreateCommentRequest,
    ) -> Result<i64, DomainError> {
        let req = req.validate()?;
        self.repo
            .create_comment(NewComment {
                comment: req.comment,
                user_id: req.user_id,
                post_id: req.post_id,
            })
            .await
    }

    pub(crate) async fn get_comment(&self, id: i64) -> Result<Comment, DomainError> {
        self.repo
            .get_comment(id)
            .await?
            .ok_or_else(|| DomainError::not_found("comment"))
    }

    pub(crate) async fn list_comments(&self) -> Result<Vec<Comment>, DomainError> {
        self.repo.list_comments().await
    }

    pub(crate) async fn comments_for_post(
        &self,
        post_id: i64,
    ) -> Result<Vec<PostComment>, DomainError> {
        self.repo.list_comments_for_post(post_id).await
    }

    pub(crate) async fn comments_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<UserComment>, DomainError> {
        self.repo.list_comments_by_user(user_id).await
    }

    pub(crate) async fn update_comment(
        &self,
        id: i64,
        req: UpdateCommentRequest,
    ) -> Result<(), DomainError> {
        let req = req.validate()?;
        if !self.repo.update_comment(id, &req.comment).await? {
            return Err(DomainError::not_found("comment"));
        }
        Ok(())
    }

    pub(crate) async fn delete_comment(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_comment(id).await? {
            return Err(DomainError::not_found("comment"));
        }
        Ok(())
    }
}
