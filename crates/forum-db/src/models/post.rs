//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the posts table.
///
/// `likes`, `dislikes`, and `popularity` are written exclusively by the
/// projection triggers; rows read here always carry committed tallies.
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub topic_id: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub is_edited: bool,
    pub views: i64,
    pub popularity: i64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}
