use tracing::info;

use crate::data::like_repository::LikeRepository;
use crate::domain::error::{DomainError, require_id};
use crate::domain::like::LikeTarget;

pub(crate) struct LikeService<R: LikeRepository> {
    repo: R,
}

impl<R: LikeRepository> LikeService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn count_likes(
        &self,
        target: LikeTarget,
        target_id: i64,
    ) -> Result<i64, DomainError> {
        self.repo.count_likes(target, target_id).await
    }

    /// Liking something already liked is a no-op.
    pub(crate) async fn like(
        &self,
        target: LikeTarget,
        user_id: i64,
        target_id: i64,
    ) -> Result<(), DomainError> {
        let target_id = require_id("id", target_id)?;
        self.repo.add_like(target, user_id, target_id).await?;
        info!(kind = %target, user_id, target_id, "liked");
        Ok(())
    }

    /// Removing a like that does not exist still succeeds.
    pub(crate) async fn unlike(
        &self,
        target: LikeTarget,
        user_id: i64,
        target_id: i64,
    ) -> Result<(), DomainError> {
        let target_id = require_id("id", target_id)?;
        let removed = self.repo.remove_like(target, user_id, target_id).await?;
        info!(kind = %target, user_id, target_id, removed, "unliked");
        Ok(())
    }
}
