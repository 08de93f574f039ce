//! Bitmap decoding into renderable image data.

use thiserror::Error;
use vello::peniko::{Blob, ImageAlphaType, ImageData, ImageFormat};

/// Errors that can occur while decoding bitmap content.
#[derive(Debug, Error)]
pub enum ImageDecodeError {
    /// The bytes could not be decoded as a supported image format.
    #[error("failed to decode image data: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode encoded image bytes (PNG, JPEG, ...) into RGBA [ImageData].
pub fn decode_image(data: &[u8]) -> Result<ImageData, ImageDecodeError> {
    let decoded = image::load_from_memory(data)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(rgba_image((width, height), rgba.into_raw()))
}

/// Build [ImageData] directly from raw RGBA pixels.
pub fn rgba_image(size: (u32, u32), pixels: impl Into<Vec<u8>>) -> ImageData {
    let (width, height) = size;
    ImageData {
        data: Blob::from(pixels.into()),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    }
}
