//! HTTP request and response models
//!
//! This module contains all HTTP-specific types for requests and responses.
//! These types are distinct from the `codegen_core` request types and exist
//! only in the HTTP layer.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{BarcodeQuery, QrQuery};
pub use response::{ApiInfoResponse, HealthCheckResponse, RouteInfo};
