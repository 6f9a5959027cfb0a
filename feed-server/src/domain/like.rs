use std::fmt;

/// What a like points at. Each target has its own relation table keyed by
/// `(user_id, target_id)`, so a user likes a given target at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LikeTarget {
    Post,
    Comment,
}

impl LikeTarget {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LikeTarget::Post => "post",
            LikeTarget::Comment => "comment",
        }
    }
}

impl fmt::Display for LikeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
