use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::map_db_error;
use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            content: row.content,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(input.title)
        .bind(input.content)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_db_error("insert post", err))
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, user_id, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_db_error("get post", err))?;

        Ok(row.map(Post::from))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                content,
                user_id,
                created_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_db_error("list posts", err))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn list_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                content,
                user_id,
                created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_db_error("list posts by user", err))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2,
                content = $3,
                user_id = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.user_id)
        .execute(&self.pool)
        .await
        .map_err(|err| map_db_error("update post", err))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|err| map_db_error("delete post", err))?;

        Ok(result.rows_affected() > 0)
    }
}
