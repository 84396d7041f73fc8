//! Comment entity - threaded discussion under a post

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Comment entity. Comments form a tree through `parent_comment_id`
/// (None = root-level comment on the post).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub description: String,
    pub likes: i64,
    pub dislikes: i64,
    pub is_edited: bool,
    pub post_id: Id,
    pub parent_comment_id: Option<Id>,
    pub created_by: Id,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Whether this is a reply to another comment rather than to the post
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }

    /// Soft-deleted comments keep their row (the thread keeps its shape)
    /// but carry scrubbed content.
    #[inline]
    pub fn is_scrubbed(&self) -> bool {
        self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_detection() {
        let now = Utc::now();
        let mut comment = Comment {
            id: Id::new(5),
            description: "hello".to_string(),
            likes: 0,
            dislikes: 0,
            is_edited: false,
            post_id: Id::new(1),
            parent_comment_id: None,
            created_by: Id::new(2),
            created_at: now,
        };
        assert!(!comment.is_reply());
        comment.parent_comment_id = Some(Id::new(4));
        assert!(comment.is_reply());
    }

    #[test]
    fn test_scrubbed() {
        let now = Utc::now();
        let comment = Comment {
            id: Id::new(5),
            description: String::new(),
            likes: 2,
            dislikes: 0,
            is_edited: false,
            post_id: Id::new(1),
            parent_comment_id: None,
            created_by: Id::new(2),
            created_at: now,
        };
        assert!(comment.is_scrubbed());
    }
}
