use std::sync::Arc;

use tracing::info;

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, RegisterRequest, User};
use crate::infrastructure::jwt::{JwtService, TokenSubject};
use crate::infrastructure::password::{hash_password, verify_password};

#[derive(Debug, Clone)]
pub(crate) struct LoginResult {
    pub(crate) user: User,
    pub(crate) access_token: String,
}

pub(crate) struct AuthService<R: UserRepository> {
    repo: R,
    jwt: Arc<JwtService>,
}

impl<R: UserRepository> AuthService<R> {
    pub(crate) fn new(repo: R, jwt: Arc<JwtService>) -> Self {
        Self { repo, jwt }
    }

    /// Stores a new user with a hashed password and returns its id.
    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<i64, DomainError> {
        let req = req.validate()?;

        let password_hash = hash_password(&req.password)?;

        let new_user = Self::into_new_user(req, password_hash);
        let user_id = self.repo.create_user(new_user).await?;

        info!(user_id, "user registered");
        Ok(user_id)
    }

    /// Name pairs are not unique, so the earliest registered user with the
    /// given name is the one whose password is checked.
    pub(crate) async fn login(&self, req: LoginRequest) -> Result<LoginResult, DomainError> {
        let req = req.validate()?;

        let user_creds = self
            .repo
            .find_first_by_name(&req.first_name, &req.last_name)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        verify_password(&req.password, &user_creds.password_hash)?;

        let user = user_creds.user;
        let access_token = self
            .jwt
            .generate_token(TokenSubject {
                id: user.id,
                first_name: &user.first_name,
                last_name: &user.last_name,
            })
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        info!(user_id = user.id, "user logged in");
        Ok(LoginResult { user, access_token })
    }

    pub(crate) async fn profile(&self, user_id: i64) -> Result<User, DomainError> {
        self.repo
            .get_user(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    fn into_new_user(req: RegisterRequest, password_hash: String) -> NewUser {
        NewUser {
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            password_hash,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::AuthService;
    use crate::data::user_repository::{NewUser, UserCredentials, UserPatch, UserRepository};
    use crate::domain::error::DomainError;
    use crate::domain::user::{LoginRequest, RegisterRequest, User};
    use crate::infrastructure::jwt::JwtService;

    /// In-memory user table with sequential ids.
    #[derive(Clone, Default)]
    pub(crate) struct FakeUserRepo {
        pub(crate) rows: Arc<Mutex<Vec<UserCredentials>>>,
    }

    impl FakeUserRepo {
        pub(crate) fn stored(&self) -> Vec<UserCredentials> {
            self.rows.lock().expect("rows mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create_user(&self, input: NewUser) -> Result<i64, DomainError> {
            let mut rows = self.rows.lock().expect("rows mutex poisoned");
            let id = rows.iter().map(|row| row.user.id).max().unwrap_or(0) + 1;
            rows.push(UserCredentials {
                user: User {
                    id,
                    first_name: input.first_name,
                    last_name: input.last_name,
                    phone_number: input.phone_number,
                    created_at: Utc::now(),
                },
                password_hash: input.password_hash,
            });
            Ok(id)
        }

        async fn find_first_by_name(
            &self,
            first_name: &str,
            last_name: &str,
        ) -> Result<Option<UserCredentials>, DomainError> {
            let rows = self.rows.lock().expect("rows mutex poisoned");
            Ok(rows
                .iter()
                .filter(|row| row.user.first_name == first_name && row.user.last_name == last_name)
                .min_by_key(|row| row.user.id)
                .cloned())
        }

        async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
            let rows = self.rows.lock().expect("rows mutex poisoned");
            Ok(rows
                .iter()
                .find(|row| row.user.id == id)
                .map(|row| row.user.clone()))
        }

        async fn list_users(&self) -> Result<Vec<User>, DomainError> {
            let rows = self.rows.lock().expect("rows mutex poisoned");
            Ok(rows.iter().map(|row| row.user.clone()).collect())
        }

        async fn update_user(&self, id: i64, patch: UserPatch) -> Result<bool, DomainError> {
            let mut rows = self.rows.lock().expect("rows mutex poisoned");
            match rows.iter_mut().find(|row| row.user.id == id) {
                Some(row) => {
                    row.user.first_name = patch.first_name;
                    row.user.last_name = patch.last_name;
                    row.user.phone_number = patch.phone_number;
                    row.password_hash = patch.password_hash;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_user(&self, id: i64) -> Result<bool, DomainError> {
            let mut rows = self.rows.lock().expect("rows mutex poisoned");
            let before = rows.len();
            rows.retain(|row| row.user.id != id);
            Ok(rows.len() != before)
        }
    }

    pub(crate) fn test_jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("0123456789abcdef0123456789abcdef"))
    }

    fn register_req(password: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "  Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "555-0100".to_string(),
            password: password.to_string(),
        }
    }

    fn login_req(password: &str) -> LoginRequest {
        LoginRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_stores_hash_instead_of_plaintext() {
        let repo = FakeUserRepo::default();
        let service = AuthService::new(repo.clone(), test_jwt());

        let id = service
            .register(register_req("correct-password"))
            .await
            .expect("register must succeed");

        let stored = repo.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].user.id, id);
        assert_eq!(stored[0].user.first_name, "Ada");
        assert_ne!(stored[0].password_hash, "correct-password");
        assert!(stored[0].password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn register_then_login_yields_token_for_same_user() {
        let jwt = test_jwt();
        let service = AuthService::new(FakeUserRepo::default(), jwt.clone());

        let id = service
            .register(register_req("correct-password"))
            .await
            .expect("register must succeed");
        let result = service
            .login(login_req("correct-password"))
            .await
            .expect("login must succeed");

        let claims = jwt
            .verify_token(&result.access_token)
            .expect("token must verify");
        assert_eq!(claims.id, id);
        assert_eq!(claims.first_name, "Ada");
        assert_eq!(claims.last_name, "Lovelace");
    }

    #[tokio::test]
    async fn login_with_duplicate_names_checks_first_registered_user() {
        let service = AuthService::new(FakeUserRepo::default(), test_jwt());

        let first = service
            .register(register_req("first-password"))
            .await
            .expect("first register must succeed");
        let second = service
            .register(register_req("second-password"))
            .await
            .expect("duplicate names are allowed");
        assert_ne!(first, second);

        let result = service
            .login(login_req("first-password"))
            .await
            .expect("first user must log in");
        assert_eq!(result.user.id, first);

        let err = service
            .login(login_req("second-password"))
            .await
            .expect_err("second user's password is checked against the first match");
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_returns_not_found_for_missing_user() {
        let service = AuthService::new(FakeUserRepo::default(), test_jwt());

        let err = service
            .login(login_req("some-password"))
            .await
            .expect_err("login must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn login_returns_invalid_credentials_for_wrong_password() {
        let service = AuthService::new(FakeUserRepo::default(), test_jwt());
        service
            .register(register_req("correct-password"))
            .await
            .expect("register must succeed");

        let err = service
            .login(login_req("wrong-password"))
            .await
            .expect_err("login must fail");
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn profile_of_deleted_user_is_not_found() {
        let repo = FakeUserRepo::default();
        let service = AuthService::new(repo.clone(), test_jwt());
        let id = service
            .register(register_req("correct-password"))
            .await
            .expect("register must succeed");

        assert_eq!(service.profile(id).await.expect("profile").id, id);

        repo.delete_user(id).await.expect("delete must succeed");
        let err = service.profile(id).await.expect_err("user is gone");
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
