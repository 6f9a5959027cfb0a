use async_trait::async_trait;
use sqlx::PgPool;

use super::map_db_error;
use crate::data::like_repository::LikeRepository;
use crate::domain::error::DomainError;
use crate::domain::like::LikeTarget;

#[derive(Debug, Clone)]
pub(crate) struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

struct LikeStatements {
    count: &'static str,
    insert: &'static str,
    delete: &'static str,
}

static POST_LIKES: LikeStatements = LikeStatements {
    count: "SELECT COUNT(*) FROM post_likes WHERE post_id = $1",
    insert: "INSERT INTO post_likes (user_id, post_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, post_id) DO NOTHING",
    delete: "DELETE FROM post_likes WHERE user_id = $1 AND post_id = $2",
};

static COMMENT_LIKES: LikeStatements = LikeStatements {
    count: "SELECT COUNT(*) FROM comment_likes WHERE comment_id = $1",
    insert: "INSERT INTO comment_likes (user_id, comment_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, comment_id) DO NOTHING",
    delete: "DELETE FROM comment_likes WHERE user_id = $1 AND comment_id = $2",
};

fn statements(target: LikeTarget) -> &'static LikeStatements {
    match target {
        LikeTarget::Post => &POST_LIKES,
        LikeTarget::Comment => &COMMENT_LIKES,
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn count_likes(&self, target: LikeTarget, target_id: i64) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(statements(target).count)
            .bind(target_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_db_error("count likes", err))
    }

    async fn add_like(
        &self,
        target: LikeTarget,
        user_id: i64,
        target_id: i64,
    ) -> Result<(), DomainError> {
        sqlx::query(statements(target).insert)
            .bind(user_id)
            .bind(target_id)
            .execute(&self.pool)
            .await
            .map_err(|err| map_db_error("insert like", err))?;

        Ok(())
    }

    async fn remove_like(
        &self,
        target: LikeTarget,
        user_id: i64,
        target_id: i64,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(statements(target).delete)
            .bind(user_id)
            .bind(target_id)
            .execute(&self.pool)
            .await
            .map_err(|err| map_db_error("delete like", err))?;

        Ok(result.rows_affected() > 0)
    }
}
