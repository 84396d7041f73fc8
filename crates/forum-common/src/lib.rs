//! # forum-common
//!
//! Cross-cutting utilities shared by every layer: configuration loading,
//! password hashing, JWT handling, the application error type, and tracing
//! setup.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, ConfigError};
pub use error::{AppError, ErrorResponse};
