use crate::data::user_repository::{UserPatch, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{UpdateUserRequest, User};
use crate::infrastructure::password::hash_password;

pub(crate) struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list_users().await
    }

    pub(crate) async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .get_user(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    pub(crate) async fn update_user(
        &self,
        id: i64,
        req: UpdateUserRequest,
    ) -> Result<(), DomainError> {
        let req = req.validate()?;
        let patch = UserPatch {
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            password_hash: hash_password(&req.password)?,
        };

        if !self.repo.update_user(id, patch).await? {
            return Err(DomainError::not_found("user"));
        }
        Ok(())
    }

    pub(crate) async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_user(id).await? {
            return Err(DomainError::not_found("user"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UserService;
    use crate::application::auth_service::tests::FakeUserRepo;
    use crate::data::user_repository::{NewUser, UserRepository};
    use crate::domain::error::DomainError;
    use crate::domain::user::UpdateUserRequest;
    use crate::infrastructure::password::verify_password;

    fn update_req(password: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            phone_number: "555-0199".to_string(),
            password: password.to_string(),
        }
    }

    async fn seed(repo: &FakeUserRepo) -> i64 {
        repo.create_user(NewUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "555-0100".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        })
        .await
        .expect("seed must succeed")
    }

    #[tokio::test]
    async fn update_user_rehashes_new_password() {
        let repo = FakeUserRepo::default();
        let id = seed(&repo).await;
        let service = UserService::new(repo.clone());

        service
            .update_user(id, update_req("new-password"))
            .await
            .expect("update must succeed");

        let stored = repo.stored();
        assert_eq!(stored[0].user.first_name, "Grace");
        assert_ne!(stored[0].password_hash, "new-password");
        verify_password("new-password", &stored[0].password_hash).expect("hash must match");
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let service = UserService::new(FakeUserRepo::default());

        let err = service
            .update_user(404, update_req("pw"))
            .await
            .expect_err("must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_rejects_blank_fields_before_storage() {
        let service = UserService::new(FakeUserRepo::default());
        let mut req = update_req("pw");
        req.phone_number = "  ".to_string();

        let err = service.update_user(1, req).await.expect_err("must fail");
        assert!(matches!(
            err,
            DomainError::Validation {
                field: "phone_number",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn delete_user_twice_reports_not_found() {
        let repo = FakeUserRepo::default();
        let id = seed(&repo).await;
        let service = UserService::new(repo);

        assert_eq!(service.get_user(id).await.expect("user exists").id, id);
        service.delete_user(id).await.expect("first delete succeeds");
        let err = service.delete_user(id).await.expect_err("second delete fails");
        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(service.list_users().await.expect("list").is_empty());
        assert!(matches!(
            service.get_user(id).await,
            Err(DomainError::NotFound(_))
        ));
    }
}
