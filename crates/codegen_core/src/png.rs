//! PNG serialisation of rendered images.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::errors::GenerationError;

#[cfg(test)]
#[path = "png_tests.rs"]
mod tests;

/// The eight byte signature every PNG stream starts with.
pub const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode an image as PNG into an in-memory buffer.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, GenerationError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
