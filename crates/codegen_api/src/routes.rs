//! HTTP routing configuration
//!
//! This module defines all HTTP routes and their corresponding handlers.
//!
//! # Route Structure
//!
//! - GET /                   - Service description
//! - GET /health             - Health check
//! - GET /generate-barcode/  - Barcode PNG
//! - GET /generate-qr/       - QR code PNG
//!
//! The generation routes are also served without the trailing slash.

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - CORS configuration
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState) -> Router {
    // The service is read-only, so any origin may issue GET requests
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
        .max_age(Duration::from_secs(3600));

    // Configure request tracing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().include_headers(true))
        .on_response(DefaultOnResponse::new().include_headers(true));

    let timeout_layer = TimeoutLayer::new(state.request_timeout);

    Router::new()
        .route("/", get(handlers::api_info))
        .route("/health", get(handlers::health_check))
        .route("/generate-barcode/", get(handlers::generate_barcode))
        .route("/generate-barcode", get(handlers::generate_barcode))
        .route("/generate-qr/", get(handlers::generate_qr))
        .route("/generate-qr", get(handlers::generate_qr))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(middleware::map_response(api_middleware::timeout_detail))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
