//! Request extractors

mod auth;
mod pagination;
mod validated;

pub use auth::AuthUser;
pub use pagination::{ListQuery, SearchQuery};
pub use validated::ValidatedJson;
