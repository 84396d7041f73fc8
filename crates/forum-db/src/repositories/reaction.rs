//! PostgreSQL implementation of the reaction ledger
//!
//! One repository serves both reactable kinds; the target table is selected
//! by an exhaustive match, never by request data. Counter maintenance lives
//! in the projection triggers, so every statement here is a plain ledger
//! mutation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Reaction, ReactionTarget, Vote};
use forum_core::traits::{ReactionRepository, RepoResult};
use forum_core::value_objects::Id;
use forum_core::DomainError;

use crate::models::ReactionModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// (table, subject id column) for a reaction target
const fn ledger_table(target: ReactionTarget) -> (&'static str, &'static str) {
    match target {
        ReactionTarget::Post(_) => ("post_reactions", "post_id"),
        ReactionTarget::Comment(_) => ("comment_reactions", "comment_id"),
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn react(&self, target: ReactionTarget, user_id: Id, vote: Vote) -> RepoResult<()> {
        let (table, subject_column) = ledger_table(target);
        let sql =
            format!("INSERT INTO {table} ({subject_column}, user_id, vote) VALUES ($1, $2, $3)");

        sqlx::query(&sql)
            .bind(target.id().into_inner())
            .bind(user_id.into_inner())
            .bind(vote.as_bool())
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::AlreadyReacted))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unreact(&self, target: ReactionTarget, user_id: Id) -> RepoResult<()> {
        let (table, subject_column) = ledger_table(target);
        let sql = format!("DELETE FROM {table} WHERE {subject_column} = $1 AND user_id = $2");

        let result = sqlx::query(&sql)
            .bind(target.id().into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        // The store reports absence as zero rows affected, not as an error.
        if result.rows_affected() == 0 {
            return Err(DomainError::ReactionNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, target: ReactionTarget, user_id: Id) -> RepoResult<Option<Reaction>> {
        let (table, subject_column) = ledger_table(target);
        let sql = format!(
            "SELECT {subject_column} AS subject_id, user_id, vote FROM {table} WHERE {subject_column} = $1 AND user_id = $2"
        );

        let result = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(target.id().into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(|model| Reaction {
            target,
            user_id: Id::new(model.user_id),
            vote: Vote::from(model.vote),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }

    #[test]
    fn test_ledger_table_selection() {
        assert_eq!(
            ledger_table(ReactionTarget::Post(Id::new(1))),
            ("post_reactions", "post_id")
        );
        assert_eq!(
            ledger_table(ReactionTarget::Comment(Id::new(1))),
            ("comment_reactions", "comment_id")
        );
    }
}
