//! Raster decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodedImage, LoadError, Orientation};

/// Decode image bytes (PNG, JPEG, BMP, GIF), applying EXIF orientation
/// correction so the result is always upright.
///
/// # Errors
///
/// Returns `LoadError::UnsupportedFormat` if the format cannot be recognized.
/// Returns `LoadError::CorruptedFile` if the data is truncated or corrupt.
/// Returns `LoadError::EmptyImage` if the image has no pixels.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, LoadError> {
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(LoadError::UnsupportedFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => LoadError::UnsupportedFormat,
        other => LoadError::CorruptedFile(other.to_string()),
    })?;

    let decoded = DecodedImage::from_rgba_image(apply_orientation(img, orientation).into_rgba8(), orientation);
    if decoded.is_empty() {
        return Err(LoadError::EmptyImage {
            width: decoded.width,
            height: decoded.height,
        });
    }

    log::debug!(
        "decoded {}x{} image (orientation {:?})",
        decoded.width,
        decoded.height,
        orientation
    );
    Ok(decoded)
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Extract EXIF orientation value from image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}
