//! Domain errors - the closed outcome vocabulary for the domain layer
//!
//! Every store failure is resolved into one of these variants at the
//! repository boundary; no raw driver error crosses into the service or
//! authorization layers.

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Topic not found: {0}")]
    TopicNotFound(Id),

    #[error("Post not found: {0}")]
    PostNotFound(Id),

    #[error("Comment not found: {0}")]
    CommentNotFound(Id),

    #[error("Reaction not found")]
    ReactionNotFound,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    AlreadyReacted,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Topic title already taken")]
    TitleTaken,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Caller does not own this resource")]
    NotOwner,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Update contains no recognized fields")]
    EmptyUpdate,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TopicNotFound(_) => "UNKNOWN_TOPIC",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReactionNotFound => "UNKNOWN_REACTION",

            // Conflict
            Self::AlreadyReacted => "REACTION_ALREADY_EXISTS",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::TitleTaken => "TITLE_TAKEN",

            // Authorization
            Self::NotOwner => "NOT_OWNER",

            // Validation
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EmptyUpdate => "EMPTY_UPDATE",

            // Infrastructure
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::TopicNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReactionNotFound
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyReacted | Self::UsernameTaken | Self::TitleTaken
        )
    }

    /// Check if this is an authorization error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::NotOwner)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmptyUpdate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Id::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::AlreadyReacted;
        assert_eq!(err.code(), "REACTION_ALREADY_EXISTS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PostNotFound(Id::new(1)).is_not_found());
        assert!(DomainError::ReactionNotFound.is_not_found());
        assert!(!DomainError::AlreadyReacted.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::AlreadyReacted.is_conflict());
        assert!(DomainError::UsernameTaken.is_conflict());
        assert!(!DomainError::NotOwner.is_conflict());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::EmptyUpdate.is_validation());
        assert!(DomainError::Validation("empty title".to_string()).is_validation());
        assert!(!DomainError::Database("boom".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::TopicNotFound(Id::new(123));
        assert_eq!(err.to_string(), "Topic not found: 123");

        let err = DomainError::EmptyUpdate;
        assert_eq!(err.to_string(), "Update contains no recognized fields");
    }
}
