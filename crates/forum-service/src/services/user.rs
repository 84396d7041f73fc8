//! User service
//!
//! Account reads and owner-guarded mutations. A user owns exactly
//! themself; every operation here runs behind the guard.

use forum_common::auth::hash_password;
use forum_core::traits::UserPatch;
use forum_core::value_objects::{Id, SubjectKind};
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::OwnershipService;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a user profile (callers may only read their own)
    #[instrument(skip(self))]
    pub async fn get(&self, caller: Id, user_id: Id) -> ServiceResult<UserResponse> {
        self.authorize(caller, user_id).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Apply a partial update to an account
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Id,
        user_id: Id,
        request: UpdateUserRequest,
    ) -> ServiceResult<()> {
        self.authorize(caller, user_id).await?;

        let password_hash = match request.password {
            Some(password) => Some(
                hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?,
            ),
            None => None,
        };

        // An all-absent request reaches the repository and surfaces as
        // EmptyUpdate there
        self.ctx
            .user_repo()
            .update(
                user_id,
                UserPatch {
                    username: request.username,
                    password_hash,
                    last_active: None,
                },
            )
            .await?;

        info!(user_id = %user_id, "User updated");
        Ok(())
    }

    /// Delete an account. Owned subjects are re-homed to the sentinel by
    /// the store; the account's reactions cascade away.
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Id, user_id: Id) -> ServiceResult<()> {
        self.authorize(caller, user_id).await?;

        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }

    async fn authorize(&self, caller: Id, user_id: Id) -> ServiceResult<()> {
        OwnershipService::new(self.ctx)
            .authorize(caller, SubjectKind::User, user_id)
            .await
    }
}
