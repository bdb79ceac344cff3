//! OS clipboard through arboard.

use std::borrow::Cow;

use imgez_core::{Clipboard, ClipboardError, ImageState};

/// The desktop clipboard, opened on first use and kept open so the copied
/// image stays available while the process runs.
///
/// On Linux the clipboard contents live in the process that set them. A
/// clipboard made with [`until_replaced`](Self::until_replaced) blocks in
/// `write_image` until another application takes the clipboard over, so a
/// copy made just before exit is not lost.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For a final copy right before the process exits.
    pub fn until_replaced() -> Self {
        Self { inner: None, wait: true }
    }

    pub fn waits_for_replacement(&self) -> bool {
        self.wait
    }
}

impl Clipboard for SystemClipboard {
    fn write_image(&mut self, image: &ImageState) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not opened".to_string()));
        };

        // arboard wants RGBA rows, which is exactly the ImageState layout
        let data = arboard::ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: Cow::Borrowed(image.pixels()),
        };

        #[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
        if self.wait {
            use arboard::SetExtLinux;
            log::info!("serving clipboard until another application takes it over");
            return clipboard
                .set()
                .wait()
                .image(data)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()));
        }

        clipboard
            .set_image(data)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
