//! # CodeGen Core
//!
//! Symbol generation for the CodeGen service: linear barcodes and QR codes
//! rendered to PNG bytes.
//!
//! ## Overview
//!
//! Every generation call follows the same three steps:
//! 1. Validate the request parameters
//! 2. Hand the payload to an external encoder (`barcoders` or `qrcode`)
//! 3. Rasterise the encoder output and serialise it as PNG
//!
//! The encoding algorithms themselves are not implemented here.
//!
//! ## Examples
//!
//! ```no_run
//! use codegen_core::{generate_barcode, generate_qr, BarcodeRequest, Limits, QrRequest};
//!
//! # fn example() -> Result<(), codegen_core::GenerationError> {
//! let limits = Limits::default();
//!
//! let barcode = generate_barcode(&BarcodeRequest::new("ABC-123"), &limits)?;
//! let qr = generate_qr(&QrRequest::new("https://example.com").with_module_size(4), &limits)?;
//!
//! assert!(barcode.starts_with(&codegen_core::PNG_MAGIC));
//! assert!(qr.starts_with(&codegen_core::PNG_MAGIC));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`GenerationError`]. Use [`GenerationError::class`]
//! to tell rejected requests apart from encoder failures.

pub mod barcode;
pub mod color;
pub mod errors;
pub mod png;
pub mod qr;
pub mod symbology;

pub use barcode::{generate_barcode, generate_barcode_with_style, BarcodeRequest, BarcodeStyle};
pub use color::parse_color;
pub use errors::{ErrorClass, GenerationError};
pub use png::{encode_png, PNG_MAGIC};
pub use qr::{generate_qr, QrRequest};
pub use symbology::Symbology;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Default maximum payload length in bytes.
pub const DEFAULT_MAX_DATA_LENGTH: usize = 2048;

/// Largest width or height, in pixels, of any rendered image.
pub const MAX_IMAGE_SIDE: u64 = 16_384;

/// Largest pixel count (width x height) of any rendered image.
///
/// Bounds a single RGBA canvas to 64 MiB.
pub const MAX_IMAGE_PIXELS: u64 = 16_777_216;

/// Limits applied to every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum payload length in bytes
    pub max_data_length: usize,
}

impl Limits {
    /// Create limits with the given maximum payload length.
    pub fn new(max_data_length: usize) -> Self {
        Self { max_data_length }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DATA_LENGTH)
    }
}

/// Reject empty or oversized payloads.
pub(crate) fn check_data(data: &str, limits: &Limits) -> Result<(), GenerationError> {
    if data.is_empty() {
        return Err(GenerationError::EmptyData);
    }

    if data.len() > limits.max_data_length {
        return Err(GenerationError::DataTooLong {
            actual: data.len(),
            max: limits.max_data_length,
        });
    }

    Ok(())
}

/// Convert image dimensions to pixels, enforcing [`MAX_IMAGE_SIDE`] per side
/// and [`MAX_IMAGE_PIXELS`] in total.
pub(crate) fn check_dimensions(width: u64, height: u64) -> Result<(u32, u32), GenerationError> {
    let too_large = width > MAX_IMAGE_SIDE
        || height > MAX_IMAGE_SIDE
        || width.saturating_mul(height) > MAX_IMAGE_PIXELS;

    if too_large {
        return Err(GenerationError::ImageTooLarge { width, height });
    }

    Ok((width as u32, height as u32))
}
