//! User entity - represents a forum account

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// User entity. The credential hash never leaves the data layer; entities
/// handed to callers carry only public fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Whether this is the sentinel account standing in for deleted owners
    #[inline]
    pub fn is_deleted_sentinel(&self) -> bool {
        self.id.is_deleted_owner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_detection() {
        let now = Utc::now();
        let user = User {
            id: Id::DELETED_OWNER,
            username: "deleted".to_string(),
            created_at: now,
            last_active: now,
        };
        assert!(user.is_deleted_sentinel());
    }
}
