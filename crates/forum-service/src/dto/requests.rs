//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`, and `Validate` where input
//! constraints exist. Violations surface as the ValidationFailed outcome
//! before any store access.

use forum_core::entities::Vote;
use forum_core::value_objects::Id;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update user request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

// ============================================================================
// Topic Requests
// ============================================================================

/// Create topic request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,
}

/// Update topic request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTopicRequest {
    #[validate(length(min = 1, max = 200, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Description cannot be empty"))]
    pub description: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: String,

    pub topic_id: Id,
}

/// Update post request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000, message = "Description cannot be empty"))]
    pub description: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: String,

    pub post_id: Id,

    pub parent_comment_id: Option<Id>,
}

/// Update comment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 10000, message = "Description cannot be empty"))]
    pub description: Option<String>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Reaction request: `true` = like, `false` = dislike
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct ReactionRequest {
    pub reaction: Vote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "alice".to_string(),
            password: "longenough".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_password = RegisterRequest {
            username: "alice".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_update_topic_absent_fields_pass() {
        let empty = UpdateTopicRequest::default();
        assert!(empty.validate().is_ok());

        let blank_title = UpdateTopicRequest {
            title: Some(String::new()),
            description: None,
        };
        assert!(blank_title.validate().is_err());
    }

    #[test]
    fn test_reaction_request_parses_boolean() {
        let request: ReactionRequest = serde_json::from_str(r#"{"reaction": true}"#).unwrap();
        assert_eq!(request.reaction, Vote::Like);

        let request: ReactionRequest = serde_json::from_str(r#"{"reaction": false}"#).unwrap();
        assert_eq!(request.reaction, Vote::Dislike);
    }
}
