//! Post service
//!
//! Post CRUD, per-topic listing, and full-text search. Fetching a post
//! counts a view; the store rescores popularity in the same write.

use forum_core::query::{Page, PageRequest};
use forum_core::traits::{NewPost, PostPatch};
use forum_core::value_objects::{Id, SubjectKind};
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::OwnershipService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post inside an existing topic
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: Id,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        // The topic must exist before the insert; a dangling id would
        // otherwise surface as an opaque FK failure
        if self
            .ctx
            .topic_repo()
            .find_by_id(request.topic_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found(
                "Topic",
                request.topic_id.to_string(),
            ));
        }

        let post = self
            .ctx
            .post_repo()
            .create(NewPost {
                title: request.title,
                description: request.description,
                topic_id: request.topic_id,
                created_by: caller,
            })
            .await?;

        info!(post_id = %post.id, topic_id = %post.topic_id, "Post created");
        Ok(PostResponse::from(&post))
    }

    /// Fetch a single post, counting the view
    #[instrument(skip(self))]
    pub async fn get(&self, post_id: Id) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .view(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        Ok(PostResponse::from(&post))
    }

    /// Apply a partial update, owner only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Id,
        post_id: Id,
        request: UpdatePostRequest,
    ) -> ServiceResult<()> {
        self.authorize(caller, post_id).await?;

        self.ctx
            .post_repo()
            .update(
                post_id,
                PostPatch {
                    title: request.title,
                    description: request.description,
                },
            )
            .await?;

        info!(post_id = %post_id, "Post updated");
        Ok(())
    }

    /// Delete a post and everything under it, owner only
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Id, post_id: Id) -> ServiceResult<()> {
        self.authorize(caller, post_id).await?;

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    /// List posts in a topic
    #[instrument(skip(self))]
    pub async fn list_by_topic(
        &self,
        topic_id: Id,
        page: PageRequest,
    ) -> ServiceResult<Page<PostResponse>> {
        let posts = self.ctx.post_repo().list_by_topic(topic_id, &page).await?;
        let items = posts.iter().map(PostResponse::from).collect();
        Ok(Page::new(items, &page))
    }

    /// Full-text search over posts, optionally scoped to a topic
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        topic_id: Option<Id>,
        page: PageRequest,
        query: &str,
    ) -> ServiceResult<Page<PostResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::validation("Query cannot be empty"));
        }

        let posts = self.ctx.post_repo().search(topic_id, &page, query).await?;
        let items = posts.iter().map(PostResponse::from).collect();
        Ok(Page::new(items, &page))
    }

    async fn authorize(&self, caller: Id, post_id: Id) -> ServiceResult<()> {
        OwnershipService::new(self.ctx)
            .authorize(caller, SubjectKind::Post, post_id)
            .await
    }
}
