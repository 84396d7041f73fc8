//! HTTP handlers, one module per resource

pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;
pub mod reactions;
pub mod topics;
pub mod users;
