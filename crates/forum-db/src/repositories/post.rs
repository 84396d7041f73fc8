//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use forum_core::entities::Post;
use forum_core::query::PageRequest;
use forum_core::traits::{NewPost, PostPatch, PostRepository, RepoResult};
use forum_core::value_objects::Id;
use forum_core::DomainError;

use crate::models::PostModel;
use crate::query::{push_page_bounds, UpdateBuilder};

use super::error::map_db_error;

const POST_COLUMNS: &str = "id, title, description, topic_id, likes, dislikes, is_edited, views, popularity, created_by, created_at";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self, post))]
    async fn create(&self, post: NewPost) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r#"
            INSERT INTO posts (title, description, topic_id, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, topic_id, likes, dislikes, is_edited, views, popularity, created_by, created_at
            "#,
        )
        .bind(&post.title)
        .bind(&post.description)
        .bind(post.topic_id.into_inner())
        .bind(post.created_by.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, title, description, topic_id, likes, dislikes, is_edited, views, popularity, created_by, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn view(&self, id: Id) -> RepoResult<Option<Post>> {
        // Single-statement increment: the scoring trigger republishes
        // popularity before the row is returned.
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            UPDATE posts SET views = views + 1
            WHERE id = $1
            RETURNING id, title, description, topic_id, likes, dislikes, is_edited, views, popularity, created_by, created_at
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn owner_of(&self, id: Id) -> RepoResult<Option<Id>> {
        let owner = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT created_by FROM posts WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(owner.map(Id::new))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Id, patch: PostPatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }

        let mut builder = UpdateBuilder::new("posts");
        builder
            .set_if("title", patch.title)
            .set_if("description", patch.description)
            .set("is_edited", true);

        let mut query = builder.finish(id)?;
        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_topic(&self, topic_id: Id, page: &PageRequest) -> RepoResult<Vec<Post>> {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts WHERE topic_id = "));
        builder.push_bind(topic_id.into_inner());
        push_page_bounds(&mut builder, page, false);

        let models: Vec<PostModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        topic_id: Option<Id>,
        page: &PageRequest,
        query: &str,
    ) -> RepoResult<Vec<Post>> {
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {POST_COLUMNS} FROM posts, plainto_tsquery('english', "
        ));
        builder.push_bind(query);
        builder.push(") AS query WHERE document @@ query");

        if let Some(topic_id) = topic_id {
            builder.push(" AND topic_id = ");
            builder.push_bind(topic_id.into_inner());
        }

        push_page_bounds(&mut builder, page, true);

        let models: Vec<PostModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Post::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }
}
