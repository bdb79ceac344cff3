//! imgez Core - Interactive crop/rotate editing library
//!
//! This crate provides the core of imgez: a rectangular selection edited with
//! the pointer, lossless crop and 90° rotation, undo history, and the
//! decode/encode/clipboard services around them.
//!
//! The entry point is [`Document`], which owns one image with its selection
//! and history and turns pointer events into edits.

pub mod buffer;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod history;
pub mod selection;
pub mod transform;
pub mod viewport;

pub use buffer::{ImageBuffer, ImageState};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use config::EditorConfig;
pub use controller::{CommandError, Document, EditKind, Gesture, Response, SelectionInfo};
pub use geometry::{Corner, CursorIcon, Edge, HitRegion, PixelRect, Point, Rect, Vector};
pub use history::{EmptyHistoryError, HistoryEntry, HistoryStack};
pub use selection::Selection;
pub use transform::{apply_crop, apply_rotation, InvalidRegionError, RotateDirection};
pub use viewport::Viewport;
