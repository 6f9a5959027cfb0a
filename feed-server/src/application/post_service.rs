use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostRequest};

pub(crate) struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_post(&self, req: PostRequest) -> Result<i64, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            title: req.title,
            content: req.content,
            user_id: req.user_id,
        };
        self.repo.create_post(new_post).await
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| DomainError::not_found("post"))
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts().await
    }

    pub(crate) async fn list_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts_by_user(user_id).await
    }

    pub(crate) async fn update_post(&self, id: i64, req: PostRequest) -> Result<(), DomainError> {
        let req = req.validate()?;
        let patch = PostPatch {
            title: req.title,
            content: req.content,
            user_id: req.user_id,
        };

        if !self.repo.update_post(id, patch).await? {
            return Err(DomainError::not_found("post"));
        }
        Ok(())
    }

    pub(crate) async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_post(id).await? {
            return Err(DomainError::not_found("post"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::PostService;
    use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{Post, PostRequest};

    #[derive(Clone, Default)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<NewPost>>>,
        update_call: Arc<Mutex<Option<(i64, PostPatch)>>>,
        update_result: Arc<Mutex<bool>>,
        delete_result: Arc<Mutex<bool>>,
        posts: Arc<Mutex<Vec<Post>>>,
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, input: NewPost) -> Result<i64, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input);
            Ok(11)
        }

        async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
            Ok(self
                .posts
                .lock()
                .expect("posts mutex poisoned")
                .iter()
                .find(|post| post.id == id)
                .cloned())
        }

        async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
            Ok(self.posts.lock().expect("posts mutex poisoned").clone())
        }

        async fn list_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
            Ok(self
                .posts
                .lock()
                .expect("posts mutex poisoned")
                .iter()
                .filter(|post| post.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn update_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError> {
            *self
                .update_call
                .lock()
                .expect("update_call mutex poisoned") = Some((id, patch));
            Ok(*self
                .update_result
                .lock()
                .expect("update_result mutex poisoned"))
        }

        async fn delete_post(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(*self
                .delete_result
                .lock()
                .expect("delete_result mutex poisoned"))
        }
    }

    fn request(title: &str, content: &str, user_id: i64) -> PostRequest {
        PostRequest {
            title: title.to_string(),
            content: content.to_string(),
            user_id,
        }
    }

    fn sample_post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            content: "body".to_string(),
            user_id,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_post_normalizes_request_before_repo_call() {
        let repo = FakePostRepo::default();
        let service = PostService::new(repo.clone());

        let id = service
            .create_post(request("  title  ", "  content  ", 10))
            .await
            .expect("create_post must succeed");
        assert_eq!(id, 11);

        let input = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.title, "title");
        assert_eq!(input.content, "content");
        assert_eq!(input.user_id, 10);
    }

    #[tokio::test]
    async fn create_post_without_owner_never_reaches_repo() {
        let repo = FakePostRepo::default();
        let service = PostService::new(repo.clone());

        let err = service
            .create_post(request("t", "c", 0))
            .await
            .expect_err("must fail validation");
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(
            repo.created_input
                .lock()
                .expect("created_input mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn update_post_passes_all_fields() {
        let repo = FakePostRepo::default();
        *repo
            .update_result
            .lock()
            .expect("update_result mutex poisoned") = true;
        let service = PostService::new(repo.clone());

        service
            .update_post(7, request(" new ", " body ", 3))
            .await
            .expect("update must succeed");

        let (id, patch) = repo
            .update_call
            .lock()
            .expect("update_call mutex poisoned")
            .clone()
            .expect("update call must be captured");
        assert_eq!(id, 7);
        assert_eq!(patch.title, "new");
        assert_eq!(patch.content, "body");
        assert_eq!(patch.user_id, 3);
    }

    #[tokio::test]
    async fn update_of_missing_post_is_not_found() {
        let service = PostService::new(FakePostRepo::default());

        let err = service
            .update_post(99, request("t", "c", 1))
            .await
            .expect_err("no rows affected");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_of_missing_post_is_not_found() {
        let service = PostService::new(FakePostRepo::default());

        let err = service.delete_post(99).await.expect_err("no rows affected");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_posts_by_user_filters_owner() {
        let repo = FakePostRepo::default();
        *repo.posts.lock().expect("posts mutex poisoned") =
            vec![sample_post(1, 10), sample_post(2, 20), sample_post(3, 10)];
        let service = PostService::new(repo);

        let posts = service
            .list_posts_by_user(10)
            .await
            .expect("list must succeed");
        let ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(service.list_posts().await.expect("list").len(), 3);
    }

    #[tokio::test]
    async fn get_post_distinguishes_missing_rows() {
        let repo = FakePostRepo::default();
        *repo.posts.lock().expect("posts mutex poisoned") = vec![sample_post(4, 1)];
        let service = PostService::new(repo);

        assert_eq!(service.get_post(4).await.expect("post exists").id, 4);
        let err = service.get_post(5).await.expect_err("post is missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
