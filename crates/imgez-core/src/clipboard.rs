//! Clipboard boundary.
//!
//! The editor hands the clipboard an [`ImageState`]: the selected region when
//! a selection is active, the whole image otherwise. OS integration lives
//! outside this crate behind the [`Clipboard`] trait.

use thiserror::Error;

use crate::buffer::ImageState;

/// OS-level clipboard failure. Never changes editor state.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (no display server, sandbox, ...).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the image.
    #[error("Failed to write image to clipboard: {0}")]
    WriteFailed(String),
}

/// Destination for copied images.
pub trait Clipboard {
    fn write_image(&mut self, image: &ImageState) -> Result<(), ClipboardError>;
}

/// Process-local clipboard keeping the last copied image.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<ImageState>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&ImageState> {
        self.contents.as_ref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_image(&mut self, image: &ImageState) -> Result<(), ClipboardError> {
        self.contents = Some(image.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_last_image() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());

        clipboard.write_image(&ImageState::new(1, 1, vec![1, 2, 3, 4])).unwrap();
        clipboard.write_image(&ImageState::new(1, 1, vec![5, 6, 7, 8])).unwrap();
        assert_eq!(clipboard.contents().unwrap().pixels(), &[5, 6, 7, 8]);
    }
}
