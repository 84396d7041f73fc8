//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Names carry a
//! time-derived suffix so reruns against the same database never collide.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ (COUNTER.fetch_add(1, Ordering::SeqCst) << 48)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            username: format!("testuser{}", unique_suffix()),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

/// Create topic request
#[derive(Debug, Serialize)]
pub struct CreateTopicRequest {
    pub title: String,
    pub description: String,
}

impl CreateTopicRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Test Topic {}", unique_suffix()),
            description: "A topic created by the integration suite".to_string(),
        }
    }
}

/// Topic response
#[derive(Debug, Deserialize)]
pub struct TopicResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_by: i64,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub topic_id: i64,
}

impl CreatePostRequest {
    pub fn in_topic(topic_id: i64) -> Self {
        Self {
            title: format!("Test Post {}", unique_suffix()),
            description: "A post created by the integration suite".to_string(),
            topic_id,
        }
    }
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub topic_id: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub is_edited: bool,
    pub views: i64,
    pub popularity: i64,
    pub created_by: i64,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub description: String,
    pub post_id: i64,
    pub parent_comment_id: Option<i64>,
}

impl CreateCommentRequest {
    pub fn on_post(post_id: i64) -> Self {
        Self {
            description: format!("Test comment {}", unique_suffix()),
            post_id,
            parent_comment_id: None,
        }
    }
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub description: String,
    pub likes: i64,
    pub dislikes: i64,
    pub post_id: i64,
    pub parent_comment_id: Option<i64>,
    pub created_by: i64,
}

/// Reaction request
#[derive(Debug, Serialize)]
pub struct ReactionRequest {
    pub reaction: bool,
}

/// Page envelope
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub count: i64,
    pub page: i64,
    pub limit: i64,
    pub sort_by: String,
    pub order: String,
    pub items: Vec<T>,
}
