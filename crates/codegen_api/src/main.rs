//! CodeGen REST API Server
//!
//! Main binary for running the API server in production or development.
//!
//! # Environment Variables
//!
//! See [`codegen_api::server`] for server settings. Logging is controlled by:
//!
//! - `RUST_LOG`: Log filter (default: info)
//! - `LOG_FORMAT`: `json` for structured output, anything else for text

use std::env;

use codegen_api::{ApiConfig, ApiServer, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    // Load configuration from environment
    let config = ApiConfig::from_env()?;

    // Create app state and server
    let state = AppState::from_config(&config);
    let server = ApiServer::new(config.clone(), state);

    tracing::info!("Starting {}", codegen_api::API_TITLE);
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        max_data_length = config.max_data_length,
        request_timeout_secs = config.request_timeout_secs,
        "Generation limits"
    );

    // Start server with graceful shutdown
    server.serve().await
}
