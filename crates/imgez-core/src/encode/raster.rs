//! Raster encoding for the clipboard and for saving.
//!
//! Encoders come from the `image` crate. PNG and BMP keep the alpha
//! channel; JPEG has none, so alpha is dropped before encoding.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use thiserror::Error;

use crate::buffer::ImageState;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested output format has no encoder here.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Encoding failed inside the codec
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Errors that can occur while saving to a file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Encode to PNG bytes (lossless, keeps alpha).
pub fn encode_png(image: &ImageState) -> Result<Vec<u8>, EncodeError> {
    encode(image, ImageFormat::Png, 100)
}

/// Encode to JPEG bytes.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(image: &ImageState, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode(image, ImageFormat::Jpeg, quality)
}

/// Encode into `format`. `quality` only affects JPEG and is clamped to 1-100.
pub fn encode(image: &ImageState, format: ImageFormat, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    let mut buffer = Cursor::new(Vec::new());
    let failed = |e: image::ImageError| EncodeError::EncodingFailed(e.to_string());

    match format {
        ImageFormat::Png => PngEncoder::new(&mut buffer)
            .write_image(image.pixels(), width, height, ExtendedColorType::Rgba8)
            .map_err(failed)?,
        ImageFormat::Bmp => BmpEncoder::new(&mut buffer)
            .write_image(image.pixels(), width, height, ExtendedColorType::Rgba8)
            .map_err(failed)?,
        ImageFormat::Jpeg => {
            let rgb: Vec<u8> = image
                .pixels()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(failed)?
        }
        other => return Err(EncodeError::UnsupportedFormat(format!("{other:?}"))),
    }

    Ok(buffer.into_inner())
}

/// Encode in the format implied by the file extension of `path`.
pub fn encode_for_path(image: &ImageState, path: &Path, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| EncodeError::UnsupportedFormat(path.display().to_string()))?;
    encode(image, format, quality)
}

/// Encode and write to `path`.
pub fn save_to_path(image: &ImageState, path: &Path, quality: u8) -> Result<(), SaveError> {
    let bytes = encode_for_path(image, path, quality)?;
    fs::write(path, bytes).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}
