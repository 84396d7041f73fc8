//! Authentication handlers

use axum::{extract::State, Json};
use forum_service::dto::{AuthResponse, LoginRequest, RegisterRequest};
use forum_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(response))
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
