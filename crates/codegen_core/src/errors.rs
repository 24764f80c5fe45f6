//! Error types for symbol generation
//!
//! Every failure raised while validating, encoding, or rendering a symbol is
//! expressed as a [`GenerationError`]. Callers decide how to surface an error
//! by asking for its [`ErrorClass`] rather than matching on variants.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Coarse classification of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request itself is unusable and was rejected before encoding.
    Client,

    /// A request parameter is outside of its accepted range.
    Validation,

    /// The encoder or renderer failed on an otherwise well-formed request.
    Encoding,
}

/// Errors raised while generating a barcode or QR code image.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("The barcode type '{name}' is not valid.")]
    UnknownSymbology { name: String },

    #[error("The parameter 'data' cannot be empty.")]
    EmptyData,

    #[error("The parameter 'data' is too long: {actual} bytes (max: {max})")]
    DataTooLong { actual: usize, max: usize },

    #[error("The parameter '{field}' must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("invalid data for {symbology}: {reason}")]
    InvalidPayload { symbology: String, reason: String },

    #[error("unsupported color '{value}': {reason}")]
    UnsupportedColor { value: String, reason: String },

    #[error("data does not fit in a QR code: {reason}")]
    EncodingOverflow { reason: String },

    #[error(
        "image of {width}x{height} pixels exceeds the limit of {} pixels per side or {} pixels in total",
        crate::MAX_IMAGE_SIDE,
        crate::MAX_IMAGE_PIXELS
    )]
    ImageTooLarge { width: u64, height: u64 },

    #[error("failed to encode PNG: {0}")]
    ImageEncoding(#[from] image::ImageError),
}

impl GenerationError {
    /// Create an invalid payload error for the named symbology.
    pub fn invalid_payload(symbology: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPayload {
            symbology: symbology.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an out of range error for a numeric parameter.
    pub fn out_of_range(field: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Classify this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::UnknownSymbology { .. } | Self::EmptyData | Self::DataTooLong { .. } => {
                ErrorClass::Client
            }
            Self::OutOfRange { .. } => ErrorClass::Validation,
            Self::InvalidPayload { .. }
            | Self::UnsupportedColor { .. }
            | Self::EncodingOverflow { .. }
            | Self::ImageTooLarge { .. }
            | Self::ImageEncoding(_) => ErrorClass::Encoding,
        }
    }
}
