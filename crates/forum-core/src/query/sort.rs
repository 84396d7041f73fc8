//! Sort keys and orders - closed vocabulary, per-kind whitelists

use crate::value_objects::SubjectKind;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse a request value; anything unrecognized is None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ASC" | "asc" => Some(Self::Asc),
            "DESC" | "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// The value echoed back in page envelopes
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sort key vocabulary across all resource kinds.
///
/// `Relevance` is a sentinel that only means anything under a full-text
/// predicate; outside a search it degrades to the default key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Likes,
    Views,
    Popularity,
    Relevance,
}

impl SortKey {
    /// Parse a request value; anything unrecognized is None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created_at" => Some(Self::CreatedAt),
            "likes" => Some(Self::Likes),
            "views" => Some(Self::Views),
            "popularity" => Some(Self::Popularity),
            "relevance" => Some(Self::Relevance),
            _ => None,
        }
    }

    /// The value echoed back in page envelopes
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Likes => "likes",
            Self::Views => "views",
            Self::Popularity => "popularity",
            Self::Relevance => "relevance",
        }
    }

    /// Whether this key is accepted for the given resource kind.
    ///
    /// `searching` widens the whitelist with `Relevance` for the kinds that
    /// carry a full-text document.
    pub fn allowed_for(self, kind: SubjectKind, searching: bool) -> bool {
        match kind {
            SubjectKind::Topic => match self {
                Self::CreatedAt => true,
                Self::Relevance => searching,
                _ => false,
            },
            SubjectKind::Post => match self {
                Self::CreatedAt | Self::Likes | Self::Views | Self::Popularity => true,
                Self::Relevance => searching,
            },
            SubjectKind::Comment => matches!(self, Self::CreatedAt | Self::Likes),
            SubjectKind::User => matches!(self, Self::CreatedAt),
        }
    }
}
