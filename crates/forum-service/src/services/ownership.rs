//! Ownership guard
//!
//! Gates every mutating operation on a subject: resolve the owner, compare
//! to the caller, short-circuit on any mismatch before side effects. Runs
//! entirely on committed state; the mutation it guards enforces its own
//! invariants in the store.

use tracing::{instrument, warn};

use forum_core::value_objects::{Id, SubjectKind};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Ownership guard service
pub struct OwnershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OwnershipService<'a> {
    /// Create a new OwnershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Allow the mutation only when the caller owns the subject.
    ///
    /// - missing subject -> NotFound
    /// - owner is the sentinel -> Forbidden (a deleted owner grants nobody)
    /// - owner != caller -> Forbidden
    #[instrument(skip(self))]
    pub async fn authorize(
        &self,
        caller: Id,
        kind: SubjectKind,
        subject_id: Id,
    ) -> ServiceResult<()> {
        let owner = self
            .owner_of(kind, subject_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(kind.name(), subject_id.to_string()))?;

        if owner.is_deleted_owner() || owner != caller {
            warn!(
                caller = %caller,
                owner = %owner,
                subject = %subject_id,
                kind = %kind,
                "mutation denied"
            );
            return Err(ServiceError::Forbidden);
        }

        Ok(())
    }

    /// Resolve a subject's owner through the kind's repository.
    ///
    /// Users own themselves; everything else carries an ownership column
    /// that the store re-homes to the sentinel on owner deletion.
    async fn owner_of(&self, kind: SubjectKind, subject_id: Id) -> ServiceResult<Option<Id>> {
        let owner = match kind {
            SubjectKind::Topic => self.ctx.topic_repo().owner_of(subject_id).await?,
            SubjectKind::Post => self.ctx.post_repo().owner_of(subject_id).await?,
            SubjectKind::Comment => self.ctx.comment_repo().owner_of(subject_id).await?,
            SubjectKind::User => self
                .ctx
                .user_repo()
                .find_by_id(subject_id)
                .await?
                .map(|user| user.id),
        };

        Ok(owner)
    }
}
