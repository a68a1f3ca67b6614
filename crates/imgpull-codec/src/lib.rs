//! Raster normalization: whatever came over the wire goes out as PNG.
//!
//! The source format is sniffed from the payload's magic bytes; the manifest
//! never declares it. Animated inputs contribute their first frame only.
//! Pixels are passed through untouched apart from what the PNG encoder
//! itself implies.

mod error;

pub use error::{CodecError, Result};

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

/// File extension of every normalized image.
pub const OUTPUT_EXTENSION: &str = "png";

/// An encoded PNG plus the raster geometry it was built from.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub source_format: Option<ImageFormat>,
}

/// Decode `bytes` in whichever format they turn out to be.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(CodecError::Decode)
}

/// Encode a decoded raster as PNG.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(CodecError::Encode)?;
    Ok(out.into_inner())
}

/// Decode then re-encode as PNG.
pub fn normalize(bytes: &[u8]) -> Result<Normalized> {
    let source_format = image::guess_format(bytes).ok();
    let image = decode(bytes)?;
    let encoded = encode_png(&image)?;

    Ok(Normalized {
        bytes: encoded,
        width: image.width(),
        height: image.height(),
        source_format,
    })
}
