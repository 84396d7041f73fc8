//! Reaction - one user's boolean vote on a reactable subject
//!
//! Reaction rows are the ledger backing the like/dislike counters. They are
//! created once per (subject, user) and deleted on un-react; a vote change is
//! delete + insert, never an in-place update.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Id, SubjectKind};

/// A like or dislike. Serialized as a bare boolean (`true` = like) to match
/// the persisted ledger column and the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Vote {
    Like,
    Dislike,
}

impl Vote {
    /// The ledger's boolean representation
    #[inline]
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::Like)
    }

    /// The opposite vote
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

impl From<bool> for Vote {
    fn from(value: bool) -> Self {
        if value {
            Self::Like
        } else {
            Self::Dislike
        }
    }
}

impl From<Vote> for bool {
    fn from(vote: Vote) -> Self {
        vote.as_bool()
    }
}

/// The subject a reaction attaches to. Only posts and comments are
/// reactable; the ledger selects its table by matching on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionTarget {
    Post(Id),
    Comment(Id),
}

impl ReactionTarget {
    /// The id of the subject being reacted to
    #[inline]
    pub const fn id(self) -> Id {
        match self {
            Self::Post(id) | Self::Comment(id) => id,
        }
    }

    /// The subject kind this target addresses
    #[inline]
    pub const fn kind(self) -> SubjectKind {
        match self {
            Self::Post(_) => SubjectKind::Post,
            Self::Comment(_) => SubjectKind::Comment,
        }
    }
}

/// Reaction entity - one row of the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub target: ReactionTarget,
    pub user_id: Id,
    pub vote: Vote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_bool_roundtrip() {
        assert_eq!(Vote::from(true), Vote::Like);
        assert_eq!(Vote::from(false), Vote::Dislike);
        assert!(Vote::Like.as_bool());
        assert!(!Vote::Dislike.as_bool());
    }

    #[test]
    fn test_vote_flipped() {
        assert_eq!(Vote::Like.flipped(), Vote::Dislike);
        assert_eq!(Vote::Dislike.flipped(), Vote::Like);
    }

    #[test]
    fn test_vote_serde_as_bool() {
        assert_eq!(serde_json::to_string(&Vote::Like).unwrap(), "true");
        let vote: Vote = serde_json::from_str("false").unwrap();
        assert_eq!(vote, Vote::Dislike);
    }

    #[test]
    fn test_target_kind() {
        assert_eq!(ReactionTarget::Post(Id::new(1)).kind(), SubjectKind::Post);
        assert_eq!(
            ReactionTarget::Comment(Id::new(1)).kind(),
            SubjectKind::Comment
        );
    }
}
