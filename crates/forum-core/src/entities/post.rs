//! Post entity - an entry inside a topic

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Post entity.
///
/// `likes`, `dislikes`, and `popularity` are projections maintained by the
/// store from the reaction ledger; application code never writes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub topic_id: Id,
    pub likes: i64,
    pub dislikes: i64,
    pub is_edited: bool,
    pub views: i64,
    pub popularity: i64,
    pub created_by: Id,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Net approval: likes minus dislikes
    #[inline]
    pub fn score(&self) -> i64 {
        self.likes - self.dislikes
    }

    /// Whether the creating account has since been deleted
    #[inline]
    pub fn is_orphaned(&self) -> bool {
        self.created_by.is_deleted_owner()
    }
}
