//! Subject kinds - the closed set of resources that can be owned

use std::fmt;

/// The resource kinds the ownership guard and query shaper operate on.
///
/// This is a closed vocabulary: table names, sort whitelists, and owner
/// lookups are all selected by exhaustive matches on this enum, never by
/// strings flowing in from requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    Topic,
    Post,
    Comment,
    User,
}

impl SubjectKind {
    /// Human-readable resource name for error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Topic => "Topic",
            Self::Post => "Post",
            Self::Comment => "Comment",
            Self::User => "User",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
