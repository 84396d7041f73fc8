//! # forum-api
//!
//! REST API server: axum handlers, routes, extractors, and server
//! bootstrap. Everything here is thin transport glue over forum-service.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
