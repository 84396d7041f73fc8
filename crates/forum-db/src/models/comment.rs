//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub description: String,
    pub likes: i64,
    pub dislikes: i64,
    pub is_edited: bool,
    pub post_id: i64,
    pub parent_comment_id: Option<i64>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}
