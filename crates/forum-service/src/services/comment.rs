//! Comment service
//!
//! Threaded comments under posts. Deletion is soft: the row survives with
//! scrubbed content so replies keep their parent.

use forum_core::query::{Page, PageRequest};
use forum_core::traits::{CommentPatch, NewComment};
use forum_core::value_objects::{Id, SubjectKind};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::OwnershipService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a post, optionally as a reply to another comment
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        caller: Id,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if self
            .ctx
            .post_repo()
            .find_by_id(request.post_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Post", request.post_id.to_string()));
        }

        // A reply must thread under a comment on the same post
        if let Some(parent_id) = request.parent_comment_id {
            let parent = self
                .ctx
                .comment_repo()
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Comment", parent_id.to_string()))?;

            if parent.post_id != request.post_id {
                return Err(ServiceError::validation(
                    "Parent comment belongs to a different post",
                ));
            }
        }

        let comment = self
            .ctx
            .comment_repo()
            .create(NewComment {
                description: request.description,
                post_id: request.post_id,
                parent_comment_id: request.parent_comment_id,
                created_by: caller,
            })
            .await?;

        info!(comment_id = %comment.id, post_id = %comment.post_id, "Comment created");
        Ok(CommentResponse::from(&comment))
    }

    /// Fetch a single comment
    #[instrument(skip(self))]
    pub async fn get(&self, comment_id: Id) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        Ok(CommentResponse::from(&comment))
    }

    /// Apply a partial update, owner only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        caller: Id,
        comment_id: Id,
        request: UpdateCommentRequest,
    ) -> ServiceResult<()> {
        self.authorize(caller, comment_id).await?;

        self.ctx
            .comment_repo()
            .update(
                comment_id,
                CommentPatch {
                    description: request.description,
                },
            )
            .await?;

        info!(comment_id = %comment_id, "Comment updated");
        Ok(())
    }

    /// Soft-delete a comment, owner only
    #[instrument(skip(self))]
    pub async fn delete(&self, caller: Id, comment_id: Id) -> ServiceResult<()> {
        self.authorize(caller, comment_id).await?;

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment scrubbed");
        Ok(())
    }

    /// List comments under a post
    #[instrument(skip(self))]
    pub async fn list_by_post(
        &self,
        post_id: Id,
        page: PageRequest,
    ) -> ServiceResult<Page<CommentResponse>> {
        let comments = self.ctx.comment_repo().list_by_post(post_id, &page).await?;
        let items = comments.iter().map(CommentResponse::from).collect();
        Ok(Page::new(items, &page))
    }

    async fn authorize(&self, caller: Id, comment_id: Id) -> ServiceResult<()> {
        OwnershipService::new(self.ctx)
            .authorize(caller, SubjectKind::Comment, comment_id)
            .await
    }
}
