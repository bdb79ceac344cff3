//! The image being edited and its committed history.
//!
//! [`ImageState`] is an immutable snapshot: crop and rotate never touch an
//! existing state, they derive a new one and push it onto the
//! [`HistoryStack`]. Pixel data is reference counted so history entries and
//! clones share buffers.

use std::sync::Arc;

use crate::decode::{decode_image, DecodedImage, LoadError, Orientation};
use crate::geometry::{PixelRect, Rect};
use crate::history::{EmptyHistoryError, HistoryStack};
use crate::transform::{apply_crop, apply_rotation, copy_region, InvalidRegionError, RotateDirection};

/// Immutable RGBA8 pixel buffer with its dimensions and orientation record.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageState {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
    orientation: Orientation,
    quarter_turns: u8,
}

impl ImageState {
    /// Create an upright state from raw RGBA pixels (4 bytes per pixel).
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len()` is not `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels: pixels.into(),
            orientation: Orientation::Normal,
            quarter_turns: 0,
        }
    }

    pub fn from_decoded(image: DecodedImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            pixels: image.pixels.into(),
            orientation: image.orientation,
            quarter_turns: 0,
        }
    }

    /// A new state sharing this state's orientation record.
    pub(crate) fn derive(&self, width: u32, height: u32, pixels: Vec<u8>, quarter_turns: u8) -> Self {
        Self {
            width,
            height,
            pixels: pixels.into(),
            orientation: self.orientation,
            quarter_turns,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA pixel data in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// EXIF orientation that was applied when the image was loaded.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Clockwise quarter turns applied since load, modulo 4.
    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    /// The full image as a rectangle in image coordinates.
    pub fn extent(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// True if both states hold the same pixels at the same size.
    pub fn same_pixels(&self, other: &ImageState) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }

    /// A copy of the pixels inside `region`, or `None` if it misses the image.
    pub fn region(&self, region: &Rect) -> Option<ImageState> {
        let px: PixelRect = region.to_pixel_rect(self.width, self.height)?;
        Some(self.derive(px.width, px.height, copy_region(self, px), self.quarter_turns))
    }

    /// Convert to an image::RgbaImage for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
    }
}

/// The current image plus its undo history.
///
/// The buffer always reflects the top of its history; it exists only once an
/// image has been loaded, so [`current_state`](Self::current_state) never fails.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    history: HistoryStack,
}

impl ImageBuffer {
    /// Decode `bytes` into a fresh buffer whose history holds one entry.
    ///
    /// # Errors
    ///
    /// `LoadError` if the bytes cannot be decoded.
    pub fn load(bytes: &[u8], max_history: Option<usize>) -> Result<Self, LoadError> {
        let decoded = decode_image(bytes)?;
        Ok(Self::from_state(ImageState::from_decoded(decoded), max_history))
    }

    pub fn from_state(state: ImageState, max_history: Option<usize>) -> Self {
        Self {
            history: HistoryStack::new(state, max_history),
        }
    }

    /// Crop the current state to `rect` and record the result.
    ///
    /// # Errors
    ///
    /// `InvalidRegionError` when `rect` has zero area or lies fully outside
    /// the image; history is left untouched.
    pub fn crop(&mut self, rect: &Rect) -> Result<&ImageState, InvalidRegionError> {
        let cropped = apply_crop(self.current_state(), rect)?;
        log::info!(
            "cropped {}x{} -> {}x{}",
            self.current_state().width(),
            self.current_state().height(),
            cropped.width(),
            cropped.height()
        );
        self.history.push(cropped);
        Ok(self.current_state())
    }

    /// Rotate the current state by 90° and record the result.
    pub fn rotate(&mut self, direction: RotateDirection) -> &ImageState {
        let rotated = apply_rotation(self.current_state(), direction);
        log::info!("rotated {direction:?} -> {}x{}", rotated.width(), rotated.height());
        self.history.push(rotated);
        self.current_state()
    }

    pub fn undo(&mut self) -> Result<&ImageState, EmptyHistoryError> {
        self.history.undo()
    }

    pub fn reset_to_original(&mut self) -> &ImageState {
        self.history.reset_to_original()
    }

    pub fn current_state(&self) -> &ImageState {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }
}
