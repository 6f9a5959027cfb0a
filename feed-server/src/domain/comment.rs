use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, require_id, require_text};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) comment: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

/// A comment on a post, joined with the commenter's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostComment {
    pub(crate) id: i64,
    pub(crate) comment: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

/// A comment written by a user, joined with the title of the post it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserComment {
    pub(crate) id: i64,
    pub(crate) comment: String,
    pub(crate) title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateCommentRequest {
    pub(crate) comment: String,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
}

impl CreateCommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            comment: require_text("comment", &self.comment)?,
            user_id: require_id("user_id", self.user_id)?,
            post_id: require_id("post_id", self.post_id)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UpdateCommentRequest {
    pub(crate) comment: String,
}

impl UpdateCommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            comment: require_text("comment", &self.comment)?,
        })
    }
}
