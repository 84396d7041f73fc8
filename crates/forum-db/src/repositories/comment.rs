//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use forum_core::entities::Comment;
use forum_core::query::PageRequest;
use forum_core::traits::{CommentPatch, CommentRepository, NewComment, RepoResult};
use forum_core::value_objects::Id;
use forum_core::DomainError;

use crate::models::CommentModel;
use crate::query::{push_page_bounds, UpdateBuilder};

use super::error::map_db_error;

const COMMENT_COLUMNS: &str = "id, description, likes, dislikes, is_edited, post_id, parent_comment_id, created_by, created_at";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment))]
    async fn create(&self, comment: NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (description, post_id, parent_comment_id, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, description, likes, dislikes, is_edited, post_id, parent_comment_id, created_by, created_at
            "#,
        )
        .bind(&comment.description)
        .bind(comment.post_id.into_inner())
        .bind(comment.parent_comment_id.map(Id::into_inner))
        .bind(comment.created_by.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, description, likes, dislikes, is_edited, post_id, parent_comment_id, created_by, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn owner_of(&self, id: Id) -> RepoResult<Option<Id>> {
        let owner = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT created_by FROM comments WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(owner.map(Id::new))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Id, patch: CommentPatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }

        let mut builder = UpdateBuilder::new("comments");
        builder
            .set_if("description", patch.description)
            .set("is_edited", true);

        let mut query = builder.finish(id)?;
        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Soft delete: scrub the content, keep the row so child comments
        // stay attached.
        let result = sqlx::query(
            r#"
            UPDATE comments SET description = '' WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_post(&self, post_id: Id, page: &PageRequest) -> RepoResult<Vec<Comment>> {
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = "
        ));
        builder.push_bind(post_id.into_inner());
        push_page_bounds(&mut builder, page, false);

        let models: Vec<CommentModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
