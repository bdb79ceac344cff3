//! Image decoding for imgez.
//!
//! Any raster format the `image` crate is built with (PNG, JPEG, BMP, GIF)
//! is accepted. The EXIF orientation tag, when present, is read with
//! `kamadak-exif` and applied during decoding, so every decoded image is
//! upright before it reaches the editor.
//!
//! Bytes from an open dialog and from a drag-and-drop event go through the
//! same entry point.
//!
//! # Examples
//!
//! ```ignore
//! use imgez_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let image = decode_image(&bytes)?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod types;

pub use raster::{decode_image, get_orientation};
pub use types::{DecodedImage, LoadError, Orientation};
