//! User handlers
//!
//! A caller may only read, update, or delete their own account; the
//! ownership guard inside the service enforces it.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::Id;
use forum_service::dto::{StatusResponse, UpdateUserRequest, UserResponse};
use forum_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Fetch a user profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Id>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get(auth.user_id, user_id).await?;
    Ok(Json(user))
}

/// Update a user account
///
/// PATCH /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Id>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = UserService::new(state.service_context());
    service.update(auth.user_id, user_id, request).await?;
    Ok(Json(StatusResponse::new("Updated successfully")))
}

/// Delete a user account
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Id>,
) -> ApiResult<Json<StatusResponse>> {
    let service = UserService::new(state.service_context());
    service.delete(auth.user_id, user_id).await?;
    Ok(Json(StatusResponse::new("User deleted")))
}
