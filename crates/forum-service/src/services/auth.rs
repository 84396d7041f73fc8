//! Authentication service
//!
//! Handles user registration and login.

use chrono::Utc;
use forum_common::auth::{hash_password, verify_password};
use forum_common::AppError;
use forum_core::traits::UserPatch;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // A duplicate username surfaces from the store's constraint, not
        // from a pre-check that could race
        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &password_hash)
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserResponse::from(&user),
        })
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .password_hash(user.id)
            .await?
            .filter(|hash| !hash.is_empty())
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no usable password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Successful login bumps the activity timestamp
        self.ctx
            .user_repo()
            .update(
                user.id,
                UserPatch {
                    last_active: Some(Utc::now()),
                    ..UserPatch::default()
                },
            )
            .await?;

        info!(user_id = %user.id, "User logged in");

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: UserResponse::from(&user),
        })
    }
}
