use serde::Serialize;
use utoipa::ToSchema;

pub(crate) mod comments;
pub(crate) mod likes;
pub(crate) mod posts;
pub(crate) mod users;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct MessageDto {
    pub(crate) message: String,
}

impl MessageDto {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
