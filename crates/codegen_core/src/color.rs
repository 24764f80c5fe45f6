//! Colour parsing for rendered symbols.
//!
//! Accepts anything CSS understands: named colours, `#rgb`, `#rrggbb`,
//! `#rrggbbaa`, `rgb()` and `hsl()` notations.

use image::Rgba;

use crate::errors::GenerationError;

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

/// Parse a CSS colour string into an RGBA pixel.
pub fn parse_color(value: &str) -> Result<Rgba<u8>, GenerationError> {
    let color = csscolorparser::parse(value.trim()).map_err(|e| {
        GenerationError::UnsupportedColor {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(Rgba(color.to_rgba8()))
}
