//! Data transfer objects
//!
//! Request DTOs validate input at the boundary; response DTOs are the
//! stable shapes handed to the transport layer.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateCommentRequest, CreatePostRequest, CreateTopicRequest, LoginRequest, ReactionRequest,
    RegisterRequest, UpdateCommentRequest, UpdatePostRequest, UpdateTopicRequest,
    UpdateUserRequest,
};
pub use responses::{
    AuthResponse, CommentResponse, PostResponse, StatusResponse, TopicResponse, UserResponse,
};
