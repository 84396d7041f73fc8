//! PostgreSQL implementation of TopicRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use forum_core::entities::Topic;
use forum_core::query::PageRequest;
use forum_core::traits::{NewTopic, RepoResult, TopicPatch, TopicRepository};
use forum_core::value_objects::Id;
use forum_core::DomainError;

use crate::models::TopicModel;
use crate::query::{push_page_bounds, UpdateBuilder};

use super::error::{map_db_error, map_unique_violation};

const TOPIC_COLUMNS: &str = "id, title, description, created_by, created_at";

/// PostgreSQL implementation of TopicRepository
#[derive(Clone)]
pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    /// Create a new PgTopicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    #[instrument(skip(self, topic))]
    async fn create(&self, topic: NewTopic) -> RepoResult<Topic> {
        let model = sqlx::query_as::<_, TopicModel>(
            r#"
            INSERT INTO topics (title, description, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, created_by, created_at
            "#,
        )
        .bind(&topic.title)
        .bind(&topic.description)
        .bind(topic.created_by.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TitleTaken))?;

        Ok(Topic::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(
            r#"
            SELECT id, title, description, created_by, created_at
            FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn owner_of(&self, id: Id) -> RepoResult<Option<Id>> {
        let owner = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT created_by FROM topics WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(owner.map(Id::new))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Id, patch: TopicPatch) -> RepoResult<()> {
        let mut builder = UpdateBuilder::new("topics");
        builder
            .set_if("title", patch.title)
            .set_if("description", patch.description);

        let mut query = builder.finish(id)?;
        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::TitleTaken))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TopicNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM topics WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TopicNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, page: &PageRequest) -> RepoResult<Vec<Topic>> {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {TOPIC_COLUMNS} FROM topics"));
        push_page_bounds(&mut builder, page, false);

        let models: Vec<TopicModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Topic::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, page: &PageRequest, query: &str) -> RepoResult<Vec<Topic>> {
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {TOPIC_COLUMNS} FROM topics, plainto_tsquery('english', "
        ));
        builder.push_bind(query);
        builder.push(") AS query WHERE document @@ query");
        push_page_bounds(&mut builder, page, true);

        let models: Vec<TopicModel> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Topic::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTopicRepository>();
    }
}
