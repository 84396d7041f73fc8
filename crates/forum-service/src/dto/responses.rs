//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use forum_core::value_objects::Id;
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the issued token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user representation
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Id,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

// ============================================================================
// Topic Responses
// ============================================================================

/// Topic representation
#[derive(Debug, Clone, Serialize)]
pub struct TopicResponse {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub created_by: Id,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post representation, counters included
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
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

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment representation
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
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

// ============================================================================
// Generic Responses
// ============================================================================

/// Plain acknowledgement for mutations with no body to return
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const fn new(status: &'static str) -> Self {
        Self { status }
    }
}
