//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET defaults for tests)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                username: request.username.clone(),
                password: "not-the-password".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Content flow: topic -> post -> comment
// ============================================================================

async fn register(server: &TestServer) -> (AuthResponse, RegisterRequest) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (auth, request)
}

async fn create_content(server: &TestServer, token: &str) -> (TopicResponse, PostResponse) {
    let response = server
        .post_auth("/api/v1/topics", token, &CreateTopicRequest::unique())
        .await
        .unwrap();
    let topic: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", token, &CreatePostRequest::in_topic(topic.id))
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (topic, post)
}

#[tokio::test]
async fn test_topic_post_comment_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register(&server).await;
    let (topic, post) = create_content(&server, &auth.access_token).await;

    assert_eq!(post.topic_id, topic.id);
    assert_eq!(post.likes, 0);
    assert_eq!(post.created_by, auth.user.id);

    let response = server
        .post_auth(
            "/api/v1/comments",
            &auth.access_token,
            &CreateCommentRequest::on_post(post.id),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.post_id, post.id);
    assert!(comment.parent_comment_id.is_none());

    // Listing comes back inside the page envelope
    let response = server
        .get(&format!("/api/v1/posts/{}/comments", post.id))
        .await
        .unwrap();
    let page: PageResponse<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].id, comment.id);
}

#[tokio::test]
async fn test_empty_list_returns_empty_items_array() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register(&server).await;
    let (topic, _post) = create_content(&server, &auth.access_token).await;

    // A fresh post has no comments; items must be [], not null
    let response = server
        .post_auth(
            "/api/v1/posts",
            &auth.access_token,
            &CreatePostRequest::in_topic(topic.id),
        )
        .await
        .unwrap();
    let fresh: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}/comments", fresh.id))
        .await
        .unwrap();
    let page: PageResponse<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.count, 0);
    assert!(page.items.is_empty());
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reaction_counters_through_the_api() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = register(&server).await;
    let (liker, _) = register(&server).await;
    let (disliker, _) = register(&server).await;
    let (_topic, post) = create_content(&server, &author.access_token).await;

    let path = format!("/api/v1/posts/{}/reaction", post.id);

    let response = server
        .post_auth(&path, &liker.access_token, &ReactionRequest { reaction: true })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth(&path, &disliker.access_token, &ReactionRequest { reaction: false })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    let post_now: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post_now.likes, 1);
    assert_eq!(post_now.dislikes, 1);
    // Fetching the post counted a view, already folded into the score
    assert_eq!(
        post_now.popularity,
        post_now.likes * 10 - post_now.dislikes * 5 + post_now.views
    );

    // Un-react removes the like
    let response = server.delete_auth(&path, &liker.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    let post_now: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(post_now.likes, 0);
    assert_eq!(post_now.dislikes, 1);
}

#[tokio::test]
async fn test_double_reaction_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = register(&server).await;
    let (_topic, post) = create_content(&server, &author.access_token).await;

    let path = format!("/api/v1/posts/{}/reaction", post.id);
    let body = ReactionRequest { reaction: true };

    let response = server.post_auth(&path, &author.access_token, &body).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post_auth(&path, &author.access_token, &body).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_unreact_without_reaction_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _) = register(&server).await;
    let (_topic, post) = create_content(&server, &author.access_token).await;

    let response = server
        .delete_auth(
            &format!("/api/v1/posts/{}/reaction", post.id),
            &author.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Ownership guard
// ============================================================================

#[tokio::test]
async fn test_non_owner_cannot_mutate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = register(&server).await;
    let (intruder, _) = register(&server).await;
    let (topic, post) = create_content(&server, &owner.access_token).await;

    let body = serde_json::json!({ "title": "hijacked" });

    let response = server
        .patch_auth(&format!("/api/v1/topics/{}", topic.id), &intruder.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&format!("/api/v1/posts/{}", post.id), &intruder.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &intruder.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_mutating_missing_subject_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register(&server).await;

    let response = server
        .patch_auth(
            "/api/v1/posts/999999999",
            &auth.access_token,
            &serde_json::json!({ "title": "ghost" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_anonymous_mutation_is_401() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/topics", &CreateTopicRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_empty_update_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = register(&server).await;
    let (topic, _post) = create_content(&server, &owner.access_token).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/topics/{}", topic.id),
            &owner.access_token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Query shaping
// ============================================================================

#[tokio::test]
async fn test_hostile_sort_key_falls_back_to_default() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/topics?sort_by=id;DROP%20TABLE%20topics&order=sideways")
        .await
        .unwrap();
    let page: PageResponse<TopicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.sort_by, "created_at");
    assert_eq!(page.order, "DESC");
}

#[tokio::test]
async fn test_out_of_range_limit_falls_back() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/topics?limit=5000").await.unwrap();
    let page: PageResponse<TopicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.limit, 10);
}

#[tokio::test]
async fn test_search_requires_query() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/topics/search?q=").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_search_finds_created_topic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register(&server).await;

    let marker = format!("quokka{}", unique_suffix());
    let request = CreateTopicRequest {
        title: format!("Wildlife {}", unique_suffix()),
        description: format!("all about the {marker} enclosure"),
    };
    server
        .post_auth("/api/v1/topics", &auth.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/topics/search?q={marker}&sort_by=relevance"))
        .await
        .unwrap();
    let page: PageResponse<TopicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.sort_by, "relevance");
}
