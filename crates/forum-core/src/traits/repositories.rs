//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Ids are assigned by the store, so `create`
//! methods accept a `New*` value and return the persisted entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Comment, Post, Reaction, ReactionTarget, Topic, User, Vote};
use crate::error::DomainError;
use crate::query::PageRequest;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Partial update for a user row. Absent fields are left untouched; an
/// all-absent patch surfaces as `DomainError::EmptyUpdate`.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub last_active: Option<DateTime<Utc>>,
}

impl UserPatch {
    /// Whether any field is present
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password_hash.is_none() && self.last_active.is_none()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new account; fails with `UsernameTaken` on a duplicate name
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Get credential hash for authentication
    async fn password_hash(&self, id: Id) -> RepoResult<Option<String>>;

    /// Apply a partial update
    async fn update(&self, id: Id, patch: UserPatch) -> RepoResult<()>;

    /// Hard delete. Owned subjects are re-homed to the sentinel owner and
    /// the user's reactions cascade away (re-firing the counter projection).
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Topic Repository
// ============================================================================

/// Insert values for a topic
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    pub created_by: Id,
}

/// Partial update for a topic row
#[derive(Debug, Clone, Default)]
pub struct TopicPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TopicPatch {
    /// Whether any field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Create a new topic; fails with `TitleTaken` on a duplicate title
    async fn create(&self, topic: NewTopic) -> RepoResult<Topic>;

    /// Find topic by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Topic>>;

    /// Resolve the owning user id (`None` = topic missing)
    async fn owner_of(&self, id: Id) -> RepoResult<Option<Id>>;

    /// Apply a partial update
    async fn update(&self, id: Id, patch: TopicPatch) -> RepoResult<()>;

    /// Hard delete; posts, comments, and reactions underneath cascade
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// List topics, shaped by the page request
    async fn list(&self, page: &PageRequest) -> RepoResult<Vec<Topic>>;

    /// Full-text search over title and description
    async fn search(&self, page: &PageRequest, query: &str) -> RepoResult<Vec<Topic>>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Insert values for a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub topic_id: Id,
    pub created_by: Id,
}

/// Partial update for a post row. Counters are store-maintained and have no
/// place here; any present field marks the post as edited.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PostPatch {
    /// Whether any field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a new post inside a topic
    async fn create(&self, post: NewPost) -> RepoResult<Post>;

    /// Find post by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>>;

    /// Find post by ID, atomically counting the view. The returned row
    /// already carries the rescored popularity.
    async fn view(&self, id: Id) -> RepoResult<Option<Post>>;

    /// Resolve the owning user id (`None` = post missing)
    async fn owner_of(&self, id: Id) -> RepoResult<Option<Id>>;

    /// Apply a partial update and set the edited flag
    async fn update(&self, id: Id, patch: PostPatch) -> RepoResult<()>;

    /// Hard delete; comments and reactions underneath cascade
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// List posts in a topic, shaped by the page request
    async fn list_by_topic(&self, topic_id: Id, page: &PageRequest) -> RepoResult<Vec<Post>>;

    /// Full-text search over title and description, optionally scoped to a
    /// topic
    async fn search(
        &self,
        topic_id: Option<Id>,
        page: &PageRequest,
        query: &str,
    ) -> RepoResult<Vec<Post>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Insert values for a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub description: String,
    pub post_id: Id,
    pub parent_comment_id: Option<Id>,
    pub created_by: Id,
}

/// Partial update for a comment row
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub description: Option<String>,
}

impl CommentPatch {
    /// Whether any field is present
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
    }
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment, optionally threaded under a parent
    async fn create(&self, comment: NewComment) -> RepoResult<Comment>;

    /// Find comment by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>>;

    /// Resolve the owning user id (`None` = comment missing)
    async fn owner_of(&self, id: Id) -> RepoResult<Option<Id>>;

    /// Apply a partial update and set the edited flag
    async fn update(&self, id: Id, patch: CommentPatch) -> RepoResult<()>;

    /// Soft delete: scrub the description, keep the row so the thread keeps
    /// its shape
    async fn delete(&self, id: Id) -> RepoResult<()>;

    /// List comments under a post, shaped by the page request
    async fn list_by_post(&self, post_id: Id, page: &PageRequest) -> RepoResult<Vec<Comment>>;
}

// ============================================================================
// Reaction Ledger
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Record a vote. The store's uniqueness constraint arbitrates
    /// concurrent double-submits: the loser surfaces as `AlreadyReacted`.
    async fn react(&self, target: ReactionTarget, user_id: Id, vote: Vote) -> RepoResult<()>;

    /// Remove a vote. Zero rows affected surfaces as `ReactionNotFound`.
    async fn unreact(&self, target: ReactionTarget, user_id: Id) -> RepoResult<()>;

    /// Look up a user's vote on a subject
    async fn find(&self, target: ReactionTarget, user_id: Id) -> RepoResult<Option<Reaction>>;
}
