//! Linear barcode generation
//!
//! Resolves the requested symbology, encodes the payload into modules and
//! paints them as vertical bars on a greyscale canvas.

use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

use crate::errors::GenerationError;
use crate::png::encode_png;
use crate::symbology::Symbology;
use crate::{check_data, check_dimensions, Limits};

#[cfg(test)]
#[path = "barcode_tests.rs"]
mod tests;

/// Symbology used when a request does not name one.
pub const DEFAULT_SYMBOLOGY: &str = "code128";

const BAR: Luma<u8> = Luma([0u8]);
const SPACE: Luma<u8> = Luma([255u8]);

/// Raster layout for linear symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeStyle {
    /// Width of the narrowest bar in pixels
    pub module_width: u32,

    /// Height of the bars in pixels
    pub bar_height: u32,

    /// Blank margin on every side, in modules
    pub quiet_zone: u32,
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 150,
            quiet_zone: 10,
        }
    }
}

/// A request to render `data` as a linear barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeRequest {
    /// Payload to encode
    pub data: String,

    /// Symbology name or alias, e.g. "code128" or "ean13"
    pub symbology: String,
}

impl BarcodeRequest {
    /// Create a request using the default symbology.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            symbology: DEFAULT_SYMBOLOGY.to_string(),
        }
    }

    /// Use the named symbology instead of the default.
    pub fn with_symbology(mut self, symbology: impl Into<String>) -> Self {
        self.symbology = symbology.into();
        self
    }

    /// Check the request before any encoding happens.
    ///
    /// The symbology is resolved first so that an unknown type is reported
    /// even when the payload is also unusable.
    pub fn validate(&self, limits: &Limits) -> Result<Symbology, GenerationError> {
        let symbology = Symbology::from_name(&self.symbology)?;
        check_data(&self.data, limits)?;
        Ok(symbology)
    }
}

/// Paint a module sequence as bars.
///
/// The image is `(modules + 2 * quiet_zone) * module_width` pixels wide and
/// `bar_height + 2 * quiet_zone * module_width` pixels tall.
pub fn render_modules(modules: &[u8], style: &BarcodeStyle) -> Result<GrayImage, GenerationError> {
    let margin = u64::from(style.quiet_zone) * u64::from(style.module_width);
    let width = (modules.len() as u64 + 2 * u64::from(style.quiet_zone))
        * u64::from(style.module_width);
    let height = u64::from(style.bar_height) + 2 * margin;

    let (width, height) = check_dimensions(width, height)?;
    let margin = margin as u32;

    let mut img = GrayImage::from_pixel(width, height, SPACE);

    for (i, module) in modules.iter().enumerate() {
        if *module != 1 {
            continue;
        }

        let x0 = margin + i as u32 * style.module_width;
        for x in x0..x0 + style.module_width {
            for y in margin..margin + style.bar_height {
                img.put_pixel(x, y, BAR);
            }
        }
    }

    Ok(img)
}

/// Render a barcode request to PNG bytes using the default style.
pub fn generate_barcode(
    request: &BarcodeRequest,
    limits: &Limits,
) -> Result<Vec<u8>, GenerationError> {
    generate_barcode_with_style(request, limits, &BarcodeStyle::default())
}

/// Render a barcode request to PNG bytes.
pub fn generate_barcode_with_style(
    request: &BarcodeRequest,
    limits: &Limits,
    style: &BarcodeStyle,
) -> Result<Vec<u8>, GenerationError> {
    let symbology = request.validate(limits)?;
    let modules = symbology.encode(&request.data)?;

    debug!(
        symbology = %symbology,
        modules = modules.len(),
        "Encoded barcode payload"
    );

    let img = render_modules(&modules, style)?;
    encode_png(&DynamicImage::ImageLuma8(img))
}
