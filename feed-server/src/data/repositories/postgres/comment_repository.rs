use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::map_db_error;
use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::domain::comment::{Comment, PostComment, UserComment};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    comment: String,
    user_id: i64,
    post_id: i64,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            comment: row.comment,
            user_id: row.user_id,
            post_id: row.post_id,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostCommentRow {
    id: i64,
    comment: String,
    first_name: String,
    last_name: String,
}

#[derive(sqlx::FromRow)]
struct UserCommentRow {
    id: i64,
    comment: String,
    title: String,
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create_comment(&self, input: NewComment) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (comment, user_id, post_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(input.comment)
        .bind(input.user_id)
        .bind(input.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_db_error("insert comment", err))
    }

    async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, comment, user_id, post_id, created_at FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_db_error("get comment", err))?;

        Ok(row.map(Comment::from))
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, comment, user_id, post_id, created_at
            FROM comments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_db_error("list comments", err))?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn list_comments_for_post(&self, post_id: i64) -> Result<Vec<PostComment>, DomainError> {
        let rows = sqlx::query_as::<_, PostCommentRow>(
            r#"
            SELECT comments.id, comments.comment, users.first_name, users.last_name
            FROM comments
            JOIN users ON comments.user_id = users.id
            WHERE comments.post_id = $1
            ORDER BY comments.id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_db_error("list comments for post", err))?;

        Ok(rows
            .into_iter()
            .map(|row| PostComment {
                id: row.id,
                comment: row.comment,
                first_name: row.first_name,
                last_name: row.last_name,
            })
            .collect())
    }

    async fn list_comments_by_user(&self, user_id: i64) -> Result<Vec<UserComment>, DomainError> {
        let rows = sqlx::query_as::<_, UserCommentRow>(
            r#"
            SELECT comments.id, comments.comment, posts.title
            FROM comments
            JOIN posts ON comments.post_id = posts.id
            WHERE comments.user_id = $1
            ORDER BY comments.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_db_error("list comments by user", err))?;

        Ok(rows
            .into_iter()
            .map(|row| UserComment {
                id: row.id,
                comment: row.comment,
                title: row.title,
            })
            .collect())
    }

    async fn update_comment(&self, id: i64, comment: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE comments SET comment = $2 WHERE id = $1")
            .bind(id)
            .bind(comment)
            .execute(&self.pool)
            .await
            .map_err(|err| map_db_error("update comment", err))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_comment(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| map_db_error("delete comment", err))?;

        Ok(result.rows_affected() > 0)
    }
}
