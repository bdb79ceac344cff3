//! Image encoding for imgez.
//!
//! This module provides functionality for:
//! - Encoding the current image (or a region of it) for the clipboard
//! - Saving to PNG, JPEG or BMP, chosen by file extension
//!
//! # Examples
//!
//! ```ignore
//! use imgez_core::encode::{encode_png, save_to_path};
//!
//! let png = encode_png(buffer.current_state())?;
//! save_to_path(buffer.current_state(), Path::new("cropped.jpg"), 90)?;
//! ```

mod raster;

pub use raster::{encode, encode_for_path, encode_jpeg, encode_png, save_to_path, EncodeError, SaveError};
