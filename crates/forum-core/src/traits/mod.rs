//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentPatch, CommentRepository, NewComment, NewPost, NewTopic, PostPatch, PostRepository,
    ReactionRepository, RepoResult, TopicPatch, TopicRepository, UserPatch, UserRepository,
};
