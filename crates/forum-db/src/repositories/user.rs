//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::User;
use forum_core::traits::{RepoResult, UserPatch, UserRepository};
use forum_core::value_objects::Id;
use forum_core::DomainError;

use crate::models::UserModel;
use crate::query::UpdateBuilder;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, password_hash))]
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at, last_active
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, username, password_hash, created_at, last_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, username, password_hash, created_at, last_active
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn password_hash(&self, id: Id) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT password_hash FROM users WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Id, patch: UserPatch) -> RepoResult<()> {
        let mut builder = UpdateBuilder::new("users");
        builder
            .set_if("username", patch.username)
            .set_if("password_hash", patch.password_hash)
            .set_if("last_active", patch.last_active);

        let mut query = builder.finish(id)?;
        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // The sentinel row is not deletable; ownership columns default to it.
        let result = sqlx::query(
            r#"
            DELETE FROM users WHERE id = $1 AND id <> 0
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
