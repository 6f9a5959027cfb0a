use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::like::LikeTarget;

#[async_trait]
pub(crate) trait LikeRepository: Send + Sync {
    async fn count_likes(&self, target: LikeTarget, target_id: i64) -> Result<i64, DomainError>;
    /// Idempotent: liking twice leaves a single row.
    async fn add_like(
        &self,
        target: LikeTarget,
        user_id: i64,
        target_id: i64,
    ) -> Result<(), DomainError>;
    /// Returns whether a row was removed.
    async fn remove_like(
        &self,
        target: LikeTarget,
        user_id: i64,
        target_id: i64,
    ) -> Result<bool, DomainError>;
}
