//! Topic database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the topics table. The generated `document` column is
/// never selected; it exists only for the full-text predicates.
#[derive(Debug, Clone, FromRow)]
pub struct TopicModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}
