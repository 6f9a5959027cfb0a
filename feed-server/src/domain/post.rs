use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, require_id, require_text};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

/// Used for both create and update: every field is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
}

impl PostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            content: require_text("content", &self.content)?,
            user_id: require_id("user_id", self.user_id)?,
        })
    }
}

fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = require_text("title", title)?;
    if title.chars().count() > 255 {
        return Err(DomainError::Validation {
            field: "title",
            message: "must be 1..255 chars",
        });
    }
    Ok(title)
}
