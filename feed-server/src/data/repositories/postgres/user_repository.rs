use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::map_db_error;
use crate::data::user_repository::{NewUser, UserCredentials, UserPatch, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    phone_number: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct UserCredentialsRow {
    id: i64,
    first_name: String,
    last_name: String,
    phone_number: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            phone_number: row.phone_number,
            created_at: row.created_at,
        }
    }
}

impl From<UserCredentialsRow> for UserCredentials {
    fn from(row: UserCredentialsRow) -> Self {
        UserCredentials {
            user: User {
                id: row.id,
                first_name: row.first_name,
                last_name: row.last_name,
                phone_number: row.phone_number,
                created_at: row.created_at,
            },
            password_hash: row.password_hash,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (first_name, last_name, phone_number, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(input.first_name)
        .bind(input.last_name)
        .bind(input.phone_number)
        .bind(input.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_db_error("insert user", err))
    }

    async fn find_first_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let row = sqlx::query_as::<_, UserCredentialsRow>(
            r#"
            SELECT
            id,
            first_name,
            last_name,
            phone_number,
            password_hash,
            created_at
            FROM users
            WHERE first_name = $1 AND last_name = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_db_error("select user by name", err))?;

        Ok(row.map(UserCredentials::from))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, phone_number, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_db_error("select user", err))?;

        Ok(row.map(User::from))
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, phone_number, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_db_error("list users", err))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2,
                last_name = $3,
                phone_number = $4,
                password_hash = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.phone_number)
        .bind(patch.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|err| map_db_error("update user", err))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_user(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| map_db_error("delete user", err))?;

        Ok(result.rows_affected() > 0)
    }
}
