//! Rectangular cropping.
//!
//! The crop region is a [`Rect`] in image pixel coordinates. Its bounds are
//! rounded to whole pixels and clamped to the image before any pixel is
//! copied, so a region that hangs over the image edge crops to the overlap.
//!
//! # Example
//!
//! ```ignore
//! // Keep the 200x300 block starting at (100, 100)
//! let cropped = apply_crop(&image, &Rect::new(100.0, 100.0, 300.0, 400.0))?;
//! ```

use thiserror::Error;

use crate::buffer::ImageState;
use crate::geometry::{PixelRect, Rect};

const BYTES_PER_PIXEL: usize = 4;

/// The crop region has no area inside the image.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("crop region {region:?} has no area inside the {width}x{height} image")]
pub struct InvalidRegionError {
    /// The region that was requested.
    pub region: Rect,
    /// Width of the image the crop was attempted on.
    pub width: u32,
    /// Height of the image the crop was attempted on.
    pub height: u32,
}

/// Crop an image to `region`.
///
/// # Returns
///
/// A new `ImageState` containing only the pixels inside the clamped region.
/// The source image is never modified.
///
/// # Errors
///
/// `InvalidRegionError` when the region has zero area or lies entirely
/// outside the image.
pub fn apply_crop(image: &ImageState, region: &Rect) -> Result<ImageState, InvalidRegionError> {
    let invalid = || InvalidRegionError {
        region: *region,
        width: image.width(),
        height: image.height(),
    };

    let px = region
        .intersect(&image.extent())
        .and_then(|overlap| overlap.to_pixel_rect(image.width(), image.height()))
        .ok_or_else(invalid)?;

    // Fast path: full crop shares the pixel buffer
    if px.x == 0 && px.y == 0 && px.width == image.width() && px.height == image.height() {
        return Ok(image.clone());
    }

    Ok(image.derive(px.width, px.height, copy_region(image, px), image.quarter_turns()))
}

/// Copy the pixels of `px` out of `image`, row by row.
pub(crate) fn copy_region(image: &ImageState, px: PixelRect) -> Vec<u8> {
    let src_stride = image.width() as usize * BYTES_PER_PIXEL;
    let row_len = px.width as usize * BYTES_PER_PIXEL;
    let mut output = Vec::with_capacity(row_len * px.height as usize);

    for y in px.y..px.bottom() {
        let start = y as usize * src_stride + px.x as usize * BYTES_PER_PIXEL;
        output.extend_from_slice(&image.pixels()[start..start + row_len]);
    }

    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (4u32..=64, 4u32..=64)
    }

    fn create_test_image(width: u32, height: u32) -> ImageState {
        let pixels = (0..width * height)
            .flat_map(|i| {
                let v = (i % 256) as u8;
                [v, v, v, 255]
            })
            .collect();
        ImageState::new(width, height, pixels)
    }

    proptest! {
        /// Property: Output never exceeds the input and buffer length matches.
        #[test]
        fn prop_output_bounded_by_input(
            (width, height) in dimensions_strategy(),
            (l, t, r, b) in (-20.0f64..80.0, -20.0f64..80.0, -20.0f64..80.0, -20.0f64..80.0),
        ) {
            let img = create_test_image(width, height);
            if let Ok(result) = apply_crop(&img, &Rect::new(l, t, r, b)) {
                prop_assert!(result.width() >= 1 && result.width() <= width);
                prop_assert!(result.height() >= 1 && result.height() <= height);
                prop_assert_eq!(
                    result.pixels().len(),
                    (result.width() * result.height() * 4) as usize
                );
            }
        }

        /// Property: Full crop returns original image.
        #[test]
        fn prop_full_crop_returns_original((width, height) in dimensions_strategy()) {
            let img = create_test_image(width, height);
            let result = apply_crop(&img, &img.extent()).unwrap();
            prop_assert!(result.same_pixels(&img));
        }

        /// Property: Cropped pixels are taken from the matching source position.
        #[test]
        fn prop_cropped_pixels_from_original(
            (width, height) in (10u32..=40, 10u32..=40),
            (x, y, w, h) in (0u32..5, 0u32..5, 1u32..5, 1u32..5),
        ) {
            let img = create_test_image(width, height);
            let region = Rect::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64);
            let result = apply_crop(&img, &region).unwrap();

            prop_assert_eq!((result.width(), result.height()), (w, h));
            for dy in 0..h {
                for dx in 0..w {
                    let src = (((y + dy) * width + x + dx) * 4) as usize;
                    let dst = ((dy * w + dx) * 4) as usize;
                    prop_assert_eq!(&result.pixels()[dst..dst + 4], &img.pixels()[src..src + 4]);
                }
            }
        }
    }
}
