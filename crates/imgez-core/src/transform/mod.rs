//! Image transformation operations: rotation and cropping.
//!
//! Both operations are pure: they read an [`ImageState`](crate::buffer::ImageState)
//! and return a new one, leaving the source untouched. Recording the result in
//! history is the job of [`ImageBuffer`](crate::buffer::ImageBuffer).
//!
//! # Coordinate System
//!
//! - Crop regions are in image pixels, origin at the top-left corner
//! - Rotation is in quarter turns only, so it is lossless

mod crop;
mod rotation;

pub use crop::{apply_crop, InvalidRegionError};
pub use rotation::{apply_rotation, RotateDirection};

pub(crate) use crop::copy_region;
