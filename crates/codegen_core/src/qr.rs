//! QR code generation
//!
//! Encodes with error-correction level L starting at version 1, letting the
//! encoder grow the version until the payload fits, then paints each module
//! as a `module_size` square inside a `border` modules wide quiet zone.

use image::{DynamicImage, Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::color::parse_color;
use crate::errors::GenerationError;
use crate::png::encode_png;
use crate::{check_data, check_dimensions, Limits};

#[cfg(test)]
#[path = "qr_tests.rs"]
mod tests;

pub const DEFAULT_MODULE_SIZE: u32 = 10;
pub const MIN_MODULE_SIZE: u32 = 1;
pub const MAX_MODULE_SIZE: u32 = 100;

pub const DEFAULT_BORDER: u32 = 4;
pub const MIN_BORDER: u32 = 0;
pub const MAX_BORDER: u32 = 50;

pub const DEFAULT_FILL_COLOR: &str = "black";
pub const DEFAULT_BACK_COLOR: &str = "white";

/// A request to render `data` as a QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Payload to encode
    pub data: String,

    /// Pixel size of one module
    pub module_size: u32,

    /// Quiet zone width in modules
    pub border: u32,

    /// CSS colour of dark modules
    pub fill_color: String,

    /// CSS colour of the background
    pub back_color: String,
}

impl QrRequest {
    /// Create a request with default styling.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            module_size: DEFAULT_MODULE_SIZE,
            border: DEFAULT_BORDER,
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            back_color: DEFAULT_BACK_COLOR.to_string(),
        }
    }

    pub fn with_module_size(mut self, module_size: u32) -> Self {
        self.module_size = module_size;
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn with_colors(mut self, fill: impl Into<String>, back: impl Into<String>) -> Self {
        self.fill_color = fill.into();
        self.back_color = back.into();
        self
    }

    /// Check the request before any encoding happens.
    ///
    /// Colours are not checked here; an unparseable colour is a rendering
    /// failure.
    pub fn validate(&self, limits: &Limits) -> Result<(), GenerationError> {
        check_data(&self.data, limits)?;
        bounded(
            "box_size",
            i64::from(self.module_size),
            MIN_MODULE_SIZE,
            MAX_MODULE_SIZE,
        )?;
        bounded("border", i64::from(self.border), MIN_BORDER, MAX_BORDER)?;
        Ok(())
    }

    /// Encode and paint the QR code.
    pub fn render(&self) -> Result<RgbaImage, GenerationError> {
        let code = QrCode::with_error_correction_level(self.data.as_bytes(), EcLevel::L)
            .map_err(encoding_error)?;

        let fill = parse_color(&self.fill_color)?;
        let back = parse_color(&self.back_color)?;

        debug!(
            version = ?code.version(),
            modules = code.width(),
            "Encoded QR payload"
        );

        paint(&code, self.module_size, self.border, fill, back)
    }
}

/// Check that a numeric query parameter lies in `min..=max`.
pub fn bounded(field: &str, value: i64, min: u32, max: u32) -> Result<u32, GenerationError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(GenerationError::out_of_range(
            field,
            value,
            i64::from(min),
            i64::from(max),
        ));
    }

    Ok(value as u32)
}

/// Render a QR request to PNG bytes.
pub fn generate_qr(request: &QrRequest, limits: &Limits) -> Result<Vec<u8>, GenerationError> {
    request.validate(limits)?;
    let img = request.render()?;
    encode_png(&DynamicImage::ImageRgba8(img))
}

fn encoding_error(err: QrError) -> GenerationError {
    GenerationError::EncodingOverflow {
        reason: err.to_string(),
    }
}

fn paint(
    code: &QrCode,
    module_size: u32,
    border: u32,
    fill: Rgba<u8>,
    back: Rgba<u8>,
) -> Result<RgbaImage, GenerationError> {
    let module_count = code.width() as u64;
    let side = (module_count + 2 * u64::from(border)) * u64::from(module_size);
    let (side, _) = check_dimensions(side, side)?;

    let mut img = RgbaImage::from_pixel(side, side, back);
    let width = code.width();

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }

        let x0 = (border + (i % width) as u32) * module_size;
        let y0 = (border + (i / width) as u32) * module_size;
        for dy in 0..module_size {
            for dx in 0..module_size {
                img.put_pixel(x0 + dx, y0 + dy, fill);
            }
        }
    }

    Ok(img)
}
