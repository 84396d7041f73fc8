//! Entity -> response DTO mappers

use forum_core::entities::{Comment, Post, Topic, User};

use super::responses::{CommentResponse, PostResponse, TopicResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
            last_active: user.last_active,
        }
    }
}

impl From<&Topic> for TopicResponse {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title.clone(),
            description: topic.description.clone(),
            created_by: topic.created_by,
            created_at: topic.created_at,
        }
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            description: post.description.clone(),
            topic_id: post.topic_id,
            likes: post.likes,
            dislikes: post.dislikes,
            is_edited: post.is_edited,
            views: post.views,
            popularity: post.popularity,
            created_by: post.created_by,
            created_at: post.created_at,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            description: comment.description.clone(),
            likes: comment.likes,
            dislikes: comment.dislikes,
            is_edited: comment.is_edited,
            post_id: comment.post_id,
            parent_comment_id: comment.parent_comment_id,
            created_by: comment.created_by,
            created_at: comment.created_at,
        }
    }
}
