//! Topic entity - a board grouping posts

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Topic entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub created_by: Id,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    /// Whether the creating account has since been deleted
    #[inline]
    pub fn is_orphaned(&self) -> bool {
        self.created_by.is_deleted_owner()
    }
}
