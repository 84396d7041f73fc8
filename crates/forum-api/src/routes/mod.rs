//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.
//! Reads are public; mutating routes require a bearer token and pass
//! through the ownership guard in the service layer.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, comments, health, posts, reactions, topics, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(topic_routes())
        .merge(post_routes())
        .merge(comment_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes (owner-guarded, including the read)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", patch(users::update_user))
        .route("/users/:user_id", delete(users::delete_user))
}

/// Topic routes
fn topic_routes() -> Router<AppState> {
    Router::new()
        .route("/topics", get(topics::list_topics))
        .route("/topics", post(topics::create_topic))
        .route("/topics/search", get(topics::search_topics))
        .route("/topics/:topic_id", get(topics::get_topic))
        .route("/topics/:topic_id", patch(topics::update_topic))
        .route("/topics/:topic_id", delete(topics::delete_topic))
        .route("/topics/:topic_id/posts", get(posts::list_posts_by_topic))
        .route(
            "/topics/:topic_id/posts/search",
            get(posts::search_posts_in_topic),
        )
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route("/posts/search", get(posts::search_posts))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", patch(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        .route("/posts/:post_id/comments", get(comments::list_comments_by_post))
        .route("/posts/:post_id/reaction", post(reactions::react_to_post))
        .route("/posts/:post_id/reaction", delete(reactions::unreact_post))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(comments::create_comment))
        .route("/comments/:comment_id", get(comments::get_comment))
        .route("/comments/:comment_id", patch(comments::update_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
        .route(
            "/comments/:comment_id/reaction",
            post(reactions::react_to_comment),
        )
        .route(
            "/comments/:comment_id/reaction",
            delete(reactions::unreact_comment),
        )
}
