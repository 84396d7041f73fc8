//! Row identifier - 64-bit store-assigned key
//!
//! Ids are allocated by the database (BIGSERIAL), never generated in the
//! application. Id 0 is reserved for the sentinel "deleted" owner account.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned 64-bit identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(i64);

impl Id {
    /// The sentinel owner account. Subjects whose creator was deleted are
    /// re-homed to this id; the row is provisioned at schema bootstrap and
    /// must always exist.
    pub const DELETED_OWNER: Id = Id(0);

    /// Create an Id from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Whether this id is the sentinel "deleted" owner.
    ///
    /// A sentinel owner never grants ownership: authenticated callers always
    /// carry a positive id, so the comparison in the guard can never match.
    #[inline]
    pub const fn is_deleted_owner(self) -> bool {
        self.0 == Self::DELETED_OWNER.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse::<i64>().map(Id).map_err(|_| IdParseError::InvalidFormat)
    }
}

/// Error when parsing an Id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = Id::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(Id::parse("42").unwrap(), id);
    }

    #[test]
    fn test_id_parse_invalid() {
        assert!(Id::parse("not-a-number").is_err());
        assert!(Id::parse("").is_err());
    }

    #[test]
    fn test_sentinel_owner() {
        assert!(Id::DELETED_OWNER.is_deleted_owner());
        assert!(Id::new(0).is_deleted_owner());
        assert!(!Id::new(1).is_deleted_owner());
    }

    #[test]
    fn test_id_serialize_as_number() {
        let id = Id::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: Id = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
