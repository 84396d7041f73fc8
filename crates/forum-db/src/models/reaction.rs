//! Reaction database model

use sqlx::FromRow;

/// Database model for a ledger row. Both reactions tables project into this
/// shape (the subject id column is aliased in the SELECT).
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ReactionModel {
    pub subject_id: i64,
    pub user_id: i64,
    pub vote: bool,
}
