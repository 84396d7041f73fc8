//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! forum-core. Each repository handles database operations for a specific
//! domain entity; the reaction repository serves both reactable kinds.

mod comment;
mod error;
mod post;
mod reaction;
mod topic;
mod user;

pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use topic::PgTopicRepository;
pub use user::PgUserRepository;
