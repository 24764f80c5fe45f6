//! HTTP request handlers
//!
//! This module contains all request handlers for the REST API endpoints.
//!
//! # Architecture
//!
//! Each generation handler:
//! 1. Extracts and validates the query parameters
//! 2. Translates them into a `codegen_core` request
//! 3. Runs the encoder on the blocking thread pool
//! 4. Returns the PNG bytes, or an `ApiError`

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use codegen_core::{BarcodeRequest, GenerationError, QrRequest, Symbology};

use crate::{
    errors::ApiError,
    models::{
        request::{BarcodeQuery, QrQuery},
        response::{ApiInfoResponse, HealthCheckResponse, RouteInfo},
    },
    AppState, API_DESCRIPTION, API_TAG, API_TITLE,
};

const PNG_CONTENT_TYPE: &str = "image/png";

/// GET /generate-barcode/
///
/// Generate a barcode image (Code128, EAN, etc.) and return it as PNG.
pub async fn generate_barcode(
    State(state): State<AppState>,
    query: Result<Query<BarcodeQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::validation(e.body_text()))?;
    let request = BarcodeRequest::from(query);
    let limits = state.limits;

    tracing::debug!(
        barcode_type = %request.symbology,
        data_len = request.data.len(),
        "Generating barcode"
    );

    let png = run_blocking("barcode", move || {
        codegen_core::generate_barcode(&request, &limits)
    })
    .await?;

    Ok(png_response(png))
}

/// GET /generate-qr/
///
/// Generate a customised QR code and return it as PNG.
pub async fn generate_qr(
    State(state): State<AppState>,
    query: Result<Query<QrQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::validation(e.body_text()))?;
    let request = QrRequest::try_from(query).map_err(|e| ApiError::generation("QR code", e))?;
    let limits = state.limits;

    tracing::debug!(
        box_size = request.module_size,
        border = request.border,
        data_len = request.data.len(),
        "Generating QR code"
    );

    let png = run_blocking("QR code", move || {
        codegen_core::generate_qr(&request, &limits)
    })
    .await?;

    Ok(png_response(png))
}

/// GET /
///
/// Describe the service and its routes.
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        title: API_TITLE.to_string(),
        description: API_DESCRIPTION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes: vec![
            RouteInfo::get(
                "/generate-barcode/",
                "Generate a barcode (Code128, EAN, etc.).",
                API_TAG,
            ),
            RouteInfo::get("/generate-qr/", "Generate a customised QR code.", API_TAG),
            RouteInfo::get("/health", "Health check.", "Service"),
        ],
        barcode_types: Symbology::ALL
            .iter()
            .map(|s| s.name().to_string())
            .collect(),
    })
}

/// GET /health
///
/// Returns service health status with version and timestamp.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Run a CPU-bound generation job off the async workers.
async fn run_blocking<F>(kind: &'static str, job: F) -> Result<Vec<u8>, ApiError>
where
    F: FnOnce() -> Result<Vec<u8>, GenerationError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| {
            ApiError::internal(format!(
                "An error occurred while generating the {}: {}",
                kind, e
            ))
        })?
        .map_err(|e| ApiError::generation(kind, e))
}

fn png_response(png: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, PNG_CONTENT_TYPE)], png).into_response()
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
