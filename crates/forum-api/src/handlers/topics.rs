//! Topic handlers

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::query::Page;
use forum_core::{Id, SubjectKind};
use forum_service::dto::{CreateTopicRequest, StatusResponse, TopicResponse, UpdateTopicRequest};
use forum_service::TopicService;

use crate::extractors::{AuthUser, ListQuery, SearchQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a topic
///
/// POST /topics
pub async fn create_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTopicRequest>,
) -> ApiResult<Created<TopicResponse>> {
    let service = TopicService::new(state.service_context());
    let topic = service.create(auth.user_id, request).await?;
    Ok(Created(topic))
}

/// Fetch a topic
///
/// GET /topics/{topic_id}
pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Id>,
) -> ApiResult<Json<TopicResponse>> {
    let service = TopicService::new(state.service_context());
    let topic = service.get(topic_id).await?;
    Ok(Json(topic))
}

/// Update a topic
///
/// PATCH /topics/{topic_id}
pub async fn update_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(topic_id): Path<Id>,
    ValidatedJson(request): ValidatedJson<UpdateTopicRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = TopicService::new(state.service_context());
    service.update(auth.user_id, topic_id, request).await?;
    Ok(Json(StatusResponse::new("Updated successfully")))
}

/// Delete a topic
///
/// DELETE /topics/{topic_id}
pub async fn delete_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(topic_id): Path<Id>,
) -> ApiResult<Json<StatusResponse>> {
    let service = TopicService::new(state.service_context());
    service.delete(auth.user_id, topic_id).await?;
    Ok(Json(StatusResponse::new("Topic deleted")))
}

/// List topics
///
/// GET /topics
pub async fn list_topics(
    State(state): State<AppState>,
    query: ListQuery,
) -> ApiResult<Json<Page<TopicResponse>>> {
    let page = query.page_request(SubjectKind::Topic, false);
    let service = TopicService::new(state.service_context());
    let topics = service.list(page).await?;
    Ok(Json(topics))
}

/// Search topics
///
/// GET /topics/search?q=...
pub async fn search_topics(
    State(state): State<AppState>,
    query: SearchQuery,
) -> ApiResult<Json<Page<TopicResponse>>> {
    let page = query.page_request(SubjectKind::Topic);
    let service = TopicService::new(state.service_context());
    let topics = service.search(page, query.query()).await?;
    Ok(Json(topics))
}
