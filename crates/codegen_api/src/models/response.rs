//! HTTP response type definitions
//!
//! Image endpoints answer with raw PNG bytes; the JSON types here describe
//! the service itself.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

/// Service description returned from `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfoResponse {
    /// Human-readable service title
    pub title: String,

    /// Short description of the service
    pub description: String,

    /// Service version
    pub version: String,

    /// Published routes
    pub routes: Vec<RouteInfo>,

    /// Names accepted by the `barcode_type` parameter
    pub barcode_types: Vec<String>,
}

/// A single published route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// Route path
    pub path: String,

    /// HTTP method
    pub method: String,

    /// One-line summary
    pub summary: String,

    /// Grouping tag
    pub tag: String,
}

impl RouteInfo {
    pub fn get(path: &str, summary: &str, tag: &str) -> Self {
        Self {
            path: path.to_string(),
            method: "GET".to_string(),
            summary: summary.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,
}
