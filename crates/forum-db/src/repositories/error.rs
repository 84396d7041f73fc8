//! Error handling utilities for repositories
//!
//! The only place raw SQLx errors are inspected. Known constraint
//! violations become typed conflicts; everything else is wrapped opaquely.

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback.
///
/// Concurrent double-submits resolve here: the loser of a uniqueness race
/// observes the violation deterministically instead of corrupting state.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Database(e.to_string())
}
