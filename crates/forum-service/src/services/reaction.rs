//! Reaction service
//!
//! Thin orchestration over the reaction ledger. Reacting requires the
//! subject to exist but not ownership: anyone authenticated may vote.
//! Conflict and not-found outcomes from the ledger pass through untouched;
//! nothing here retries.

use forum_core::entities::{ReactionTarget, Vote};
use forum_core::value_objects::Id;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record the caller's vote on a subject.
    ///
    /// A second vote on the same subject is a conflict; changing a vote is
    /// un-react followed by react.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        caller: Id,
        target: ReactionTarget,
        vote: Vote,
    ) -> ServiceResult<()> {
        self.ensure_subject_exists(target).await?;

        self.ctx.reaction_repo().react(target, caller, vote).await?;

        info!(
            subject = %target.id(),
            kind = %target.kind(),
            user_id = %caller,
            like = vote.as_bool(),
            "Reaction recorded"
        );
        Ok(())
    }

    /// Remove the caller's vote from a subject
    #[instrument(skip(self))]
    pub async fn unreact(&self, caller: Id, target: ReactionTarget) -> ServiceResult<()> {
        self.ensure_subject_exists(target).await?;

        self.ctx.reaction_repo().unreact(target, caller).await?;

        info!(
            subject = %target.id(),
            kind = %target.kind(),
            user_id = %caller,
            "Reaction removed"
        );
        Ok(())
    }

    async fn ensure_subject_exists(&self, target: ReactionTarget) -> ServiceResult<()> {
        let exists = match target {
            ReactionTarget::Post(id) => self.ctx.post_repo().find_by_id(id).await?.is_some(),
            ReactionTarget::Comment(id) => {
                self.ctx.comment_repo().find_by_id(id).await?.is_some()
            }
        };

        if exists {
            Ok(())
        } else {
            Err(ServiceError::not_found(
                target.kind().name(),
                target.id().to_string(),
            ))
        }
    }
}
