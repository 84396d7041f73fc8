//! # forum-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management
//! - Schema bootstrap: tables, the counter-projection triggers, and the
//!   sentinel "deleted" account
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Dynamic (whitelist-gated) query construction
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_common::config::PopularityConfig;
//! use forum_db::pool::{create_pool, DatabaseConfig};
//! use forum_db::repositories::PgTopicRepository;
//! use forum_core::traits::TopicRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     forum_db::schema::bootstrap(&pool, &PopularityConfig::default()).await?;
//!     let topic_repo = PgTopicRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgPostRepository, PgReactionRepository, PgTopicRepository,
    PgUserRepository,
};
pub use schema::bootstrap;
