//! Reaction handlers
//!
//! One vote per (subject, caller); the second submit answers 409.

use axum::extract::{Path, State};
use forum_core::entities::ReactionTarget;
use forum_core::Id;
use forum_service::dto::ReactionRequest;
use forum_service::ReactionService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// React to a post
///
/// POST /posts/{post_id}/reaction
pub async fn react_to_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Id>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<NoContent> {
    let service = ReactionService::new(state.service_context());
    service
        .react(auth.user_id, ReactionTarget::Post(post_id), request.reaction)
        .await?;
    Ok(NoContent)
}

/// Remove the caller's reaction from a post
///
/// DELETE /posts/{post_id}/reaction
pub async fn unreact_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Id>,
) -> ApiResult<NoContent> {
    let service = ReactionService::new(state.service_context());
    service
        .unreact(auth.user_id, ReactionTarget::Post(post_id))
        .await?;
    Ok(NoContent)
}

/// React to a comment
///
/// POST /comments/{comment_id}/reaction
pub async fn react_to_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<Id>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<NoContent> {
    let service = ReactionService::new(state.service_context());
    service
        .react(
            auth.user_id,
            ReactionTarget::Comment(comment_id),
            request.reaction,
        )
        .await?;
    Ok(NoContent)
}

/// Remove the caller's reaction from a comment
///
/// DELETE /comments/{comment_id}/reaction
pub async fn unreact_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<Id>,
) -> ApiResult<NoContent> {
    let service = ReactionService::new(state.service_context());
    service
        .unreact(auth.user_id, ReactionTarget::Comment(comment_id))
        .await?;
    Ok(NoContent)
}
