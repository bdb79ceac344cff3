//! Editor settings.

use serde::{Deserialize, Serialize};

/// Tunables for one editor document.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Half-width of the grab band around selection edges, in screen pixels.
    pub edge_tolerance: f64,
    /// Smallest width/height an edge drag may shrink a selection to, in
    /// image pixels.
    pub min_selection_size: f64,
    /// Maximum number of history entries, including the original.
    /// `None` or 0 keeps everything.
    pub max_history: Option<usize>,
    /// JPEG quality used when saving (1-100).
    pub jpeg_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            edge_tolerance: 5.0,
            min_selection_size: 1.0,
            max_history: Some(10),
            jpeg_quality: 90,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
