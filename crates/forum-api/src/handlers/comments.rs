//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::query::Page;
use forum_core::{Id, SubjectKind};
use forum_service::dto::{
    CommentResponse, CreateCommentRequest, StatusResponse, UpdateCommentRequest,
};
use forum_service::CommentService;

use crate::extractors::{AuthUser, ListQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a comment
///
/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create(auth.user_id, request).await?;
    Ok(Created(comment))
}

/// Fetch a comment
///
/// GET /comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<Id>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.get(comment_id).await?;
    Ok(Json(comment))
}

/// Update a comment
///
/// PATCH /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<Id>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = CommentService::new(state.service_context());
    service.update(auth.user_id, comment_id, request).await?;
    Ok(Json(StatusResponse::new("Updated successfully")))
}

/// Soft-delete a comment
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<Id>,
) -> ApiResult<Json<StatusResponse>> {
    let service = CommentService::new(state.service_context());
    service.delete(auth.user_id, comment_id).await?;
    Ok(Json(StatusResponse::new("Comment deleted")))
}

/// List comments under a post
///
/// GET /posts/{post_id}/comments
pub async fn list_comments_by_post(
    State(state): State<AppState>,
    Path(post_id): Path<Id>,
    query: ListQuery,
) -> ApiResult<Json<Page<CommentResponse>>> {
    let page = query.page_request(SubjectKind::Comment, false);
    let service = CommentService::new(state.service_context());
    let comments = service.list_by_post(post_id, page).await?;
    Ok(Json(comments))
}
