//! Forum API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p forum-api
//! ```
//!
//! Configuration is loaded from environment variables (`.env` supported).

use forum_common::telemetry::{try_init_tracing, TracingConfig};
use forum_common::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first; it decides the tracing format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Starting Forum API Server"
    );

    if let Err(e) = forum_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
