use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub(crate) user: User,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone_number: String,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct UserPatch {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) phone_number: String,
    pub(crate) password_hash: String,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    /// Returns the generated user id.
    async fn create_user(&self, input: NewUser) -> Result<i64, DomainError>;
    /// Name pairs are not unique; the lowest id wins.
    async fn find_first_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<UserCredentials>, DomainError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
    /// `false` when no row matched `id`.
    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<bool, DomainError>;
    async fn delete_user(&self, id: i64) -> Result<bool, DomainError>;
}
