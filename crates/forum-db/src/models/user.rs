//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table.
///
/// Carries the credential hash; the mapper strips it before the row leaves
/// the data layer as an entity.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}
