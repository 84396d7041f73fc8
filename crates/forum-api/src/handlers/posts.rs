//! Post handlers

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::query::Page;
use forum_core::{Id, SubjectKind};
use forum_service::dto::{CreatePostRequest, PostResponse, StatusResponse, UpdatePostRequest};
use forum_service::PostService;

use crate::extractors::{AuthUser, ListQuery, SearchQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.create(auth.user_id, request).await?;
    Ok(Created(post))
}

/// Fetch a post (counts a view)
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Id>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get(post_id).await?;
    Ok(Json(post))
}

/// Update a post
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Id>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = PostService::new(state.service_context());
    service.update(auth.user_id, post_id, request).await?;
    Ok(Json(StatusResponse::new("Updated successfully")))
}

/// Delete a post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Id>,
) -> ApiResult<Json<StatusResponse>> {
    let service = PostService::new(state.service_context());
    service.delete(auth.user_id, post_id).await?;
    Ok(Json(StatusResponse::new("Post deleted")))
}

/// List posts in a topic
///
/// GET /topics/{topic_id}/posts
pub async fn list_posts_by_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Id>,
    query: ListQuery,
) -> ApiResult<Json<Page<PostResponse>>> {
    let page = query.page_request(SubjectKind::Post, false);
    let service = PostService::new(state.service_context());
    let posts = service.list_by_topic(topic_id, page).await?;
    Ok(Json(posts))
}

/// Search posts within a topic
///
/// GET /topics/{topic_id}/posts/search?q=...
pub async fn search_posts_in_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Id>,
    query: SearchQuery,
) -> ApiResult<Json<Page<PostResponse>>> {
    let page = query.page_request(SubjectKind::Post);
    let service = PostService::new(state.service_context());
    let posts = service.search(Some(topic_id), page, query.query()).await?;
    Ok(Json(posts))
}

/// Search posts across all topics
///
/// GET /posts/search?q=...
pub async fn search_posts(
    State(state): State<AppState>,
    query: SearchQuery,
) -> ApiResult<Json<Page<PostResponse>>> {
    let page = query.page_request(SubjectKind::Post);
    let service = PostService::new(state.service_context());
    let posts = service.search(None, page, query.query()).await?;
    Ok(Json(posts))
}
