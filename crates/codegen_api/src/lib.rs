//! CodeGen REST API
//!
//! This crate provides the HTTP API for generating barcode and QR code
//! images. It exposes two generation endpoints that return PNG bytes.
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - HTTP request/response translation
//! - Error mapping from generation errors to HTTP
//! - Routing, middleware and server configuration
//!
//! All symbol encoding lives in `codegen_core`. The dependency flows:
//! HTTP API → core, never the reverse.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

use std::time::Duration;

use codegen_core::Limits;

// Re-export key types for convenience
pub use errors::{ApiError, ConfigError, ErrorResponse};
pub use models::{request, response};
pub use server::{ApiConfig, ApiServer};

/// Service title published in the API description
pub const API_TITLE: &str = "Code Generation API";

/// Service description published in the API description
pub const API_DESCRIPTION: &str = "A centralised API for generating barcodes and QR codes.";

/// Tag grouping the generation routes
pub const API_TAG: &str = "Code Generator";

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application state shared across handlers
///
/// Holds immutable configuration only; handlers share no mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Limits applied to every generation request
    pub limits: Limits,

    /// Per-request timeout applied by the router
    pub request_timeout: Duration,
}

impl AppState {
    /// Create application state from the server configuration
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            limits: Limits::new(config.max_data_length),
            request_timeout: config.request_timeout(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}
