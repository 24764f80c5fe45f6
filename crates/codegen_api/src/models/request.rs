//! HTTP request type definitions
//!
//! Query-string models for the generation endpoints. They accept loosely
//! typed input (numeric parameters as `i64`) so that out-of-range values can
//! be reported with a precise message instead of a generic parse failure.
//! Translation to `codegen_core` requests happens via `TryFrom`.

use codegen_core::barcode::DEFAULT_SYMBOLOGY;
use codegen_core::qr::{
    bounded, DEFAULT_BACK_COLOR, DEFAULT_BORDER, DEFAULT_FILL_COLOR, DEFAULT_MODULE_SIZE,
    MAX_BORDER, MAX_MODULE_SIZE, MIN_BORDER, MIN_MODULE_SIZE,
};
use codegen_core::{BarcodeRequest, GenerationError, QrRequest};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// Query parameters for `GET /generate-barcode/`.
///
/// # Example
///
/// ```text
/// /generate-barcode/?data=590123412345&barcode_type=ean13
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeQuery {
    /// Text or number to encode
    pub data: String,

    /// Symbology name, e.g. code128 or ean13
    #[serde(default = "default_barcode_type")]
    pub barcode_type: String,
}

impl From<BarcodeQuery> for BarcodeRequest {
    fn from(query: BarcodeQuery) -> Self {
        BarcodeRequest::new(query.data).with_symbology(query.barcode_type)
    }
}

/// Query parameters for `GET /generate-qr/`.
///
/// # Example
///
/// ```text
/// /generate-qr/?data=https://example.com&box_size=8&fill_color=%23336699
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrQuery {
    /// Text or URL to encode
    pub data: String,

    /// Pixel size of each module (1-100)
    #[serde(default = "default_box_size")]
    pub box_size: i64,

    /// Quiet zone width in modules (0-50)
    #[serde(default = "default_border")]
    pub border: i64,

    /// Colour of the code (name or hex)
    #[serde(default = "default_fill_color")]
    pub fill_color: String,

    /// Colour of the background (name or hex)
    #[serde(default = "default_back_color")]
    pub back_color: String,
}

impl TryFrom<QrQuery> for QrRequest {
    type Error = GenerationError;

    /// Range checks happen here, before the payload is looked at, so that a
    /// malformed parameter is reported even when `data` is also empty.
    fn try_from(query: QrQuery) -> Result<Self, Self::Error> {
        let box_size = bounded("box_size", query.box_size, MIN_MODULE_SIZE, MAX_MODULE_SIZE)?;
        let border = bounded("border", query.border, MIN_BORDER, MAX_BORDER)?;

        Ok(QrRequest::new(query.data)
            .with_module_size(box_size)
            .with_border(border)
            .with_colors(query.fill_color, query.back_color))
    }
}

fn default_barcode_type() -> String {
    DEFAULT_SYMBOLOGY.to_string()
}

fn default_box_size() -> i64 {
    i64::from(DEFAULT_MODULE_SIZE)
}

fn default_border() -> i64 {
    i64::from(DEFAULT_BORDER)
}

fn default_fill_color() -> String {
    DEFAULT_FILL_COLOR.to_string()
}

fn default_back_color() -> String {
    DEFAULT_BACK_COLOR.to_string()
}
