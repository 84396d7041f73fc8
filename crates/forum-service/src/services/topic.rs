//! Topic service
//!
//! Topic CRUD, listing, and full-text search. Reads are public; mutations
//! run behind the ownership guard.

use forum_core::query::{Page, PageRequest};
use forum_core::traits::{NewTopic, TopicPatch};
use forum_core::value_objects::{Id, SubjectKind};
use tracing::{info, instrument};

use crate::dto::{CreateTopicRequest, TopicResponse, UpdateTopicRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::OwnershipService;

/// Topic service
pub struct TopicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TopicService<'a> {
    /// Create a new TopicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a topic owned by the caller
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: Id,
        request: CreateTopicRequest,
    ) -> ServiceResult<TopicResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .create(NewTopic {
                title: request.title,
                description: request.description,
                created_by: caller,
            })
            .await?;

        info!(topic_id = %topic.id, "Topic created");
        Ok(TopicResponse::from(&topic))
    }

    /// Fetch a single topic
    #[instrument(skip(self))]
    pub async fn get(&self, topic_id: Id) -> ServiceResult<TopicResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))?;

        Ok(TopicResponse::from(&topic))
    }

    /// Apply a partial update, owner only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Id,
        topic_id: Id,
        request: UpdateTopicRequest,
    ) -> ServiceResult<()> {
        self.authorize(caller, topic_id).await?;

        self.ctx
            .topic_repo()
            .update(
                topic_id,
                TopicPatch {
                    title: request.title,
                    description: request.description,
                },
            )
            .await?;

        info!(topic_id = %topic_id, "Topic updated");
        Ok(())
    }

    /// Delete a topic and everything under it, owner only
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Id, topic_id: Id) -> ServiceResult<()> {
        self.authorize(caller, topic_id).await?;

        self.ctx.topic_repo().delete(topic_id).await?;

        info!(topic_id = %topic_id, "Topic deleted");
        Ok(())
    }

    /// List topics
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> ServiceResult<Page<TopicResponse>> {
        let topics = self.ctx.topic_repo().list(&page).await?;
        let items = topics.iter().map(TopicResponse::from).collect();
        Ok(Page::new(items, &page))
    }

    /// Full-text search over topics
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        page: PageRequest,
        query: &str,
    ) -> ServiceResult<Page<TopicResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::validation("Query cannot be empty"));
        }

        let topics = self.ctx.topic_repo().search(&page, query).await?;
        let items = topics.iter().map(TopicResponse::from).collect();
        Ok(Page::new(items, &page))
    }

    async fn authorize(&self, caller: Id, topic_id: Id) -> ServiceResult<()> {
        OwnershipService::new(self.ctx)
            .authorize(caller, SubjectKind::Topic, topic_id)
            .await
    }
}
