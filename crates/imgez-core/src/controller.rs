//! Interaction controller: pointer gestures and editor commands.
//!
//! A [`Document`] is the per-window context object. It owns the image buffer
//! (with its history), the selection and the viewport, and turns raw pointer
//! events into selection edits or commits.
//!
//! # Gestures
//!
//! ```text
//! Idle --down (miss / no selection)--> Drawing       --move--> resize_to
//! Idle --down (edge/corner/inside)---> Editing(kind) --move--> move_edge / move_corner / translate
//! Drawing | Editing --up--> Idle  (a selection without area is cleared)
//! ```
//!
//! # Commands during a gesture
//!
//! `clear_selection` and `rotate` are honored at any time and end the
//! gesture. Every other command (`commit_crop`, `copy`, `undo`, `reset`,
//! `load`, `save`, double-click) is rejected with
//! [`CommandError::GestureInProgress`] and changes nothing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::{ImageBuffer, ImageState};
use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::EditorConfig;
use crate::decode::LoadError;
use crate::encode::{save_to_path, SaveError};
use crate::geometry::{Corner, Edge, HitRegion, Point, Rect, Vector};
use crate::history::{EmptyHistoryError, HistoryStack};
use crate::selection::Selection;
use crate::transform::{InvalidRegionError, RotateDirection};
use crate::viewport::Viewport;

/// What is being dragged in an editing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    Edge(Edge),
    Corner(Corner),
    Whole,
}

/// The current pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing,
    Editing {
        kind: EditKind,
        /// Pointer position minus the grabbed feature, in image pixels.
        grab: Vector,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// What a caller has to redraw after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Unchanged,
    SelectionChanged,
    ImageChanged,
}

/// Whole-pixel readout of the selection for a status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInfo {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Errors from editor commands. None of them leaves partial state behind.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No image loaded")]
    NoImage,

    #[error("No active selection")]
    NoSelection,

    #[error("Command rejected: a pointer gesture is in progress")]
    GestureInProgress,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    InvalidRegion(#[from] InvalidRegionError),

    #[error(transparent)]
    EmptyHistory(#[from] EmptyHistoryError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// One open image with its selection, history and display mapping.
#[derive(Debug, Clone)]
pub struct Document {
    config: EditorConfig,
    buffer: Option<ImageBuffer>,
    selection: Selection,
    viewport: Viewport,
    gesture: Gesture,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Document {
    pub fn new(config: EditorConfig) -> Self {
        let selection = Selection::new(Rect::default(), config.min_selection_size);
        Self {
            config,
            buffer: None,
            selection,
            viewport: Viewport::identity(0, 0),
            gesture: Gesture::Idle,
        }
    }

    // ------------------------------------------------------------------
    // File source
    // ------------------------------------------------------------------

    /// Replace the document with a newly decoded image.
    ///
    /// On failure the current image, history and selection are untouched.
    pub fn load(&mut self, bytes: &[u8]) -> Result<Response, CommandError> {
        self.ensure_idle("load")?;
        let buffer = ImageBuffer::load(bytes, self.config.max_history)?;
        log::info!(
            "loaded {}x{} image",
            buffer.current_state().width(),
            buffer.current_state().height()
        );
        self.buffer = Some(buffer);
        self.image_changed();
        Ok(Response::ImageChanged)
    }

    /// Read and load an image file.
    pub fn open(&mut self, path: &Path) -> Result<Response, CommandError> {
        self.ensure_idle("open")?;
        let bytes = fs::read(path).map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))?;
        self.load(&bytes)
    }

    // ------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------

    /// The widget showing the image was resized.
    ///
    /// May be called before any image is loaded; the first image is then
    /// fitted into this size.
    pub fn resize_view(&mut self, width: f64, height: f64) {
        let (w, h) = self.image_size();
        self.viewport = Viewport::new(width, height, w, h);
    }

    /// Hover classification for cursor feedback.
    pub fn hover(&self, screen: Point) -> HitRegion {
        match self.gesture {
            Gesture::Idle => self.selection.hit_test(screen, &self.viewport, self.config.edge_tolerance),
            Gesture::Drawing => HitRegion::None,
            Gesture::Editing { kind, .. } => match kind {
                EditKind::Edge(edge) => HitRegion::Edge(edge),
                EditKind::Corner(corner) => HitRegion::Corner(corner),
                EditKind::Whole => HitRegion::Interior,
            },
        }
    }

    // ------------------------------------------------------------------
    // Pointer events (screen coordinates)
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, screen: Point) -> Response {
        if self.buffer.is_none() || !self.gesture.is_idle() || !self.viewport.contains_screen(screen) {
            return Response::Unchanged;
        }

        let point = self.viewport.to_image(screen);
        let hit = self.selection.hit_test(screen, &self.viewport, self.config.edge_tolerance);
        let rect = self.selection.raw_rect();

        let (gesture, response) = match hit {
            HitRegion::None => {
                self.selection.begin_at(point);
                (Gesture::Drawing, Response::SelectionChanged)
            }
            HitRegion::Edge(edge) => {
                let grab = if edge.is_vertical() {
                    Vector::new(point.x - rect.edge(edge), 0.0)
                } else {
                    Vector::new(0.0, point.y - rect.edge(edge))
                };
                (editing(EditKind::Edge(edge), grab), Response::Unchanged)
            }
            HitRegion::Corner(corner) => {
                let grab = point.offset_from(rect.corner(corner));
                (editing(EditKind::Corner(corner), grab), Response::Unchanged)
            }
            HitRegion::Interior => {
                let grab = point.offset_from(rect.origin());
                (editing(EditKind::Whole, grab), Response::Unchanged)
            }
        };

        log::debug!("pointer down at {point:?}: {hit:?} -> {gesture:?}");
        self.gesture = gesture;
        response
    }

    pub fn pointer_move(&mut self, screen: Point) -> Response {
        let point = self.viewport.to_image(screen);

        match self.gesture {
            Gesture::Idle => return Response::Unchanged,
            Gesture::Drawing => self.selection.resize_to(point),
            Gesture::Editing { kind, grab } => {
                let target = Point::new(point.x - grab.dx, point.y - grab.dy);
                match kind {
                    EditKind::Edge(edge) => {
                        let coordinate = if edge.is_vertical() { target.x } else { target.y };
                        self.selection.move_edge(edge, coordinate);
                    }
                    EditKind::Corner(corner) => {
                        let held = self.selection.move_corner(corner, target);
                        self.gesture = editing(EditKind::Corner(held), grab);
                    }
                    EditKind::Whole => {
                        let delta = target.offset_from(self.selection.raw_rect().origin());
                        self.selection.translate(delta);
                    }
                }
            }
        }

        Response::SelectionChanged
    }

    pub fn pointer_up(&mut self, screen: Point) -> Response {
        if self.gesture.is_idle() {
            return Response::Unchanged;
        }
        let response = self.pointer_move(screen);
        self.gesture = Gesture::Idle;

        if !self.selection.is_active() {
            self.selection.clear();
            log::debug!("gesture ended without a selection");
            return Response::SelectionChanged;
        }
        log::debug!("gesture ended with selection {:?}", self.selection.raw_rect());
        response
    }

    /// Double-click commits the active selection; without one it does nothing.
    pub fn double_click(&mut self, _screen: Point) -> Result<Response, CommandError> {
        self.ensure_idle("double-click")?;
        if self.selection.is_active() {
            self.commit_crop()
        } else {
            Ok(Response::Unchanged)
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Crop the image to the active selection.
    pub fn commit_crop(&mut self) -> Result<Response, CommandError> {
        self.ensure_idle("crop")?;
        let rect = self.selection.rect();
        let buffer = self.buffer.as_mut().ok_or(CommandError::NoImage)?;
        let rect = rect.ok_or(CommandError::NoSelection)?;

        buffer.crop(&rect)?;
        self.image_changed();
        Ok(Response::ImageChanged)
    }

    /// Copy the selected region, or the whole image without a selection.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Result<(), CommandError> {
        self.ensure_idle("copy")?;
        let state = self.current_image().ok_or(CommandError::NoImage)?;

        let image = match self.selection.rect() {
            Some(rect) => state.region(&rect).ok_or(InvalidRegionError {
                region: rect,
                width: state.width(),
                height: state.height(),
            })?,
            None => state.clone(),
        };

        clipboard.write_image(&image)?;
        log::info!("copied {}x{} image to clipboard", image.width(), image.height());
        Ok(())
    }

    /// Step back one history entry.
    pub fn undo(&mut self) -> Result<Response, CommandError> {
        self.ensure_idle("undo")?;
        let buffer = self.buffer.as_mut().ok_or(CommandError::NoImage)?;
        buffer.undo()?;
        log::debug!("undo: {} history entries left", buffer.history().len());
        self.image_changed();
        Ok(Response::ImageChanged)
    }

    /// Return to the image as it was loaded.
    pub fn reset(&mut self) -> Result<Response, CommandError> {
        self.ensure_idle("reset")?;
        let buffer = self.buffer.as_mut().ok_or(CommandError::NoImage)?;
        buffer.reset_to_original();
        self.image_changed();
        Ok(Response::ImageChanged)
    }

    /// Drop the selection and end any gesture (Esc).
    pub fn clear_selection(&mut self) -> Response {
        if self.gesture.is_idle() && !self.selection.is_active() {
            return Response::Unchanged;
        }
        self.selection.clear();
        self.gesture = Gesture::Idle;
        Response::SelectionChanged
    }

    /// Rotate by 90°. Allowed during a gesture, which it ends.
    pub fn rotate(&mut self, direction: RotateDirection) -> Result<Response, CommandError> {
        let buffer = self.buffer.as_mut().ok_or(CommandError::NoImage)?;
        buffer.rotate(direction);
        self.image_changed();
        Ok(Response::ImageChanged)
    }

    /// Save the current image in the format implied by the extension.
    pub fn save(&self, path: &Path) -> Result<(), CommandError> {
        self.ensure_idle("save")?;
        let state = self.current_image().ok_or(CommandError::NoImage)?;
        save_to_path(state, path, self.config.jpeg_quality)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn current_image(&self) -> Option<&ImageState> {
        self.buffer.as_ref().map(ImageBuffer::current_state)
    }

    pub fn history(&self) -> Option<&HistoryStack> {
        self.buffer.as_ref().map(ImageBuffer::history)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection.rect()
    }

    /// The selection in whole image pixels, for display.
    pub fn selection_info(&self) -> Option<SelectionInfo> {
        let (w, h) = self.image_size();
        let px = self.selection.rect()?.to_pixel_rect(w, h)?;
        Some(SelectionInfo {
            x: px.x,
            y: px.y,
            width: px.width,
            height: px.height,
        })
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    fn image_size(&self) -> (u32, u32) {
        self.current_image()
            .map(|s| (s.width(), s.height()))
            .unwrap_or((0, 0))
    }

    /// The current image was replaced: refit the view and drop the selection.
    fn image_changed(&mut self) {
        let (w, h) = self.image_size();
        self.viewport = self.viewport.with_image_size(w, h);
        self.selection.set_bounds(Rect::from_size(w, h));
        self.gesture = Gesture::Idle;
    }

    fn ensure_idle(&self, command: &str) -> Result<(), CommandError> {
        if self.gesture.is_idle() {
            Ok(())
        } else {
            log::warn!("{command} rejected during {:?}", self.gesture);
            Err(CommandError::GestureInProgress)
        }
    }
}

fn editing(kind: EditKind, grab: Vector) -> Gesture {
    Gesture::Editing { kind, grab }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::encode::encode_png;

    fn gradient(width: u32, height: u32) -> ImageState {
        let pixels = (0..height)
            .flat_map(|y| (0..width).flat_map(move |x| [(x % 256) as u8, (y % 256) as u8, 0, 255]))
            .collect();
        ImageState::new(width, height, pixels)
    }

    fn document(width: u32, height: u32) -> Document {
        let mut doc = Document::default();
        doc.load(&encode_png(&gradient(width, height)).unwrap()).unwrap();
        doc
    }

    fn drag(doc: &mut Document, from: (f64, f64), to: (f64, f64)) {
        doc.pointer_down(Point::new(from.0, from.1));
        doc.pointer_move(Point::new(to.0, to.1));
        doc.pointer_up(Point::new(to.0, to.1));
    }

    #[test]
    fn test_draw_selection() {
        let mut doc = document(800, 600);
        assert_eq!(doc.pointer_down(Point::new(100.0, 100.0)), Response::SelectionChanged);
        assert_eq!(doc.gesture(), Gesture::Drawing);
        doc.pointer_move(Point::new(300.0, 400.0));
        doc.pointer_up(Point::new(300.0, 400.0));

        assert!(doc.gesture().is_idle());
        assert_eq!(doc.selection_rect(), Some(Rect::new(100.0, 100.0, 300.0, 400.0)));
        assert_eq!(
            doc.selection_info(),
            Some(SelectionInfo { x: 100, y: 100, width: 200, height: 300 })
        );
    }

    #[test]
    fn test_click_without_drag_clears() {
        let mut doc = document(100, 100);
        drag(&mut doc, (10.0, 10.0), (50.0, 50.0));
        // Click outside the selection starts a new, empty one
        drag(&mut doc, (80.0, 80.0), (80.0, 80.0));
        assert_eq!(doc.selection_rect(), None);
    }

    #[test]
    fn test_drag_corner_past_opposite() {
        let mut doc = document(800, 600);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));

        doc.pointer_down(Point::new(300.0, 400.0));
        assert_eq!(
            doc.gesture(),
            Gesture::Editing {
                kind: EditKind::Corner(Corner::BottomRight),
                grab: Vector::ZERO
            }
        );
        doc.pointer_move(Point::new(50.0, 50.0));
        doc.pointer_up(Point::new(50.0, 50.0));

        assert_eq!(doc.selection_rect(), Some(Rect::new(50.0, 50.0, 100.0, 100.0)));
    }

    #[test]
    fn test_drag_edge_keeps_grab_offset() {
        let mut doc = document(800, 600);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));

        // Grab 3px inside the left edge and move 50px right
        doc.pointer_down(Point::new(103.0, 250.0));
        doc.pointer_move(Point::new(153.0, 260.0));
        doc.pointer_up(Point::new(153.0, 260.0));

        assert_eq!(doc.selection_rect(), Some(Rect::new(150.0, 100.0, 300.0, 400.0)));
    }

    #[test]
    fn test_drag_interior_translates_without_snapping() {
        let mut doc = document(800, 600);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));

        doc.pointer_down(Point::new(200.0, 200.0));
        doc.pointer_move(Point::new(210.0, 190.0));
        doc.pointer_move(Point::new(220.0, 180.0));
        doc.pointer_up(Point::new(220.0, 180.0));

        assert_eq!(doc.selection_rect(), Some(Rect::new(120.0, 80.0, 320.0, 380.0)));
    }

    #[test]
    fn test_drag_interior_stops_at_bounds() {
        let mut doc = document(800, 600);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));

        drag(&mut doc, (200.0, 200.0), (-500.0, 2000.0));
        assert_eq!(doc.selection_rect(), Some(Rect::new(0.0, 300.0, 200.0, 600.0)));
    }

    #[test]
    fn test_commit_crop_and_double_click() {
        let mut doc = document(800, 600);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));

        assert_eq!(doc.double_click(Point::new(200.0, 200.0)).unwrap(), Response::ImageChanged);
        let image = doc.current_image().unwrap();
        assert_eq!((image.width(), image.height()), (200, 300));
        assert_eq!(doc.selection_rect(), None);
        assert_eq!(doc.history().unwrap().len(), 2);
    }

    #[test]
    fn test_double_click_without_selection_is_noop() {
        let mut doc = document(50, 50);
        assert_eq!(doc.double_click(Point::new(10.0, 10.0)).unwrap(), Response::Unchanged);
        assert_eq!(doc.history().unwrap().len(), 1);
    }

    #[test]
    fn test_commit_without_selection() {
        let mut doc = document(50, 50);
        assert!(matches!(doc.commit_crop(), Err(CommandError::NoSelection)));
    }

    #[test]
    fn test_commands_without_image() {
        let mut doc = Document::default();
        assert!(matches!(doc.commit_crop(), Err(CommandError::NoImage)));
        assert!(matches!(doc.undo(), Err(CommandError::NoImage)));
        assert!(matches!(doc.reset(), Err(CommandError::NoImage)));
        assert!(matches!(doc.rotate(RotateDirection::Clockwise), Err(CommandError::NoImage)));
        assert!(matches!(doc.copy(&mut MemoryClipboard::new()), Err(CommandError::NoImage)));
        assert_eq!(doc.clear_selection(), Response::Unchanged);
        assert_eq!(doc.pointer_down(Point::new(1.0, 1.0)), Response::Unchanged);
    }

    #[test]
    fn test_undo_on_original_is_error() {
        let mut doc = document(20, 20);
        assert!(matches!(doc.undo(), Err(CommandError::EmptyHistory(_))));
        assert_eq!(doc.history().unwrap().len(), 1);
    }

    #[test]
    fn test_commands_rejected_mid_gesture() {
        let mut doc = document(800, 600);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));
        doc.commit_crop().unwrap();

        doc.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(doc.gesture(), Gesture::Drawing);

        assert!(matches!(doc.undo(), Err(CommandError::GestureInProgress)));
        assert!(matches!(doc.reset(), Err(CommandError::GestureInProgress)));
        assert!(matches!(doc.commit_crop(), Err(CommandError::GestureInProgress)));
        assert!(matches!(
            doc.copy(&mut MemoryClipboard::new()),
            Err(CommandError::GestureInProgress)
        ));
        assert!(matches!(doc.load(b"x"), Err(CommandError::GestureInProgress)));
        assert_eq!(doc.history().unwrap().len(), 2);

        // The gesture itself carries on normally
        doc.pointer_move(Point::new(60.0, 70.0));
        doc.pointer_up(Point::new(60.0, 70.0));
        assert_eq!(doc.selection_rect(), Some(Rect::new(10.0, 10.0, 60.0, 70.0)));
    }

    #[test]
    fn test_escape_mid_gesture() {
        let mut doc = document(100, 100);
        doc.pointer_down(Point::new(10.0, 10.0));
        doc.pointer_move(Point::new(40.0, 40.0));

        assert_eq!(doc.clear_selection(), Response::SelectionChanged);
        assert!(doc.gesture().is_idle());
        assert_eq!(doc.selection_rect(), None);
        // Late events of the cancelled gesture are ignored
        assert_eq!(doc.pointer_move(Point::new(50.0, 50.0)), Response::Unchanged);
        assert_eq!(doc.pointer_up(Point::new(50.0, 50.0)), Response::Unchanged);
    }

    #[test]
    fn test_rotate_mid_gesture() {
        let mut doc = document(80, 40);
        doc.pointer_down(Point::new(10.0, 10.0));
        doc.pointer_move(Point::new(30.0, 30.0));

        assert_eq!(doc.rotate(RotateDirection::Clockwise).unwrap(), Response::ImageChanged);
        assert!(doc.gesture().is_idle());
        assert_eq!(doc.selection_rect(), None);
        let image = doc.current_image().unwrap();
        assert_eq!((image.width(), image.height()), (40, 80));
    }

    #[test]
    fn test_copy_selection_or_whole_image() {
        let mut doc = document(40, 30);
        let mut clipboard = MemoryClipboard::new();

        doc.copy(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents().unwrap().width(), 40);

        drag(&mut doc, (5.0, 6.0), (15.0, 26.0));
        doc.copy(&mut clipboard).unwrap();
        let copied = clipboard.contents().unwrap();
        assert_eq!((copied.width(), copied.height()), (10, 20));
        assert_eq!(&copied.pixels()[..4], &[5, 6, 0, 255]);

        // Copy never changes the document
        assert_eq!(doc.history().unwrap().len(), 1);
        assert!(doc.selection_rect().is_some());
    }

    #[test]
    fn test_failed_load_keeps_document() {
        let mut doc = document(30, 30);
        drag(&mut doc, (5.0, 5.0), (20.0, 20.0));

        assert!(matches!(doc.load(b"garbage"), Err(CommandError::Load(_))));
        assert_eq!(doc.current_image().unwrap().width(), 30);
        assert!(doc.selection_rect().is_some());
    }

    #[test]
    fn test_pointer_down_outside_image_ignored() {
        let mut doc = document(800, 600);
        doc.resize_view(400.0, 400.0);
        // Letterbox bar above the image
        assert_eq!(doc.pointer_down(Point::new(200.0, 10.0)), Response::Unchanged);
        assert!(doc.gesture().is_idle());
    }

    #[test]
    fn test_scaled_view_maps_to_image_pixels() {
        let mut doc = document(800, 600);
        doc.resize_view(400.0, 400.0); // scale 0.5, image drawn from y = 50

        drag(&mut doc, (50.0, 100.0), (150.0, 250.0));
        assert_eq!(doc.selection_rect(), Some(Rect::new(100.0, 100.0, 300.0, 400.0)));

        doc.commit_crop().unwrap();
        // The cropped 200x300 image is refit into the same widget
        assert!((doc.viewport().scale() - 400.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_view_sized_before_first_load() {
        let mut doc = Document::default();
        doc.resize_view(400.0, 400.0);
        doc.load(&encode_png(&gradient(800, 600)).unwrap()).unwrap();
        assert!((doc.viewport().scale() - 0.5).abs() < 1e-9);

        drag(&mut doc, (50.0, 100.0), (150.0, 250.0));
        assert_eq!(doc.selection_rect(), Some(Rect::new(100.0, 100.0, 300.0, 400.0)));
        assert_eq!(doc.selection().bounds(), Rect::from_size(800, 600));
    }

    #[test]
    fn test_resize_view_keeps_selection() {
        let mut doc = document(800, 600);
        doc.resize_view(800.0, 600.0);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));

        doc.resize_view(400.0, 300.0);
        assert_eq!(doc.selection_rect(), Some(Rect::new(100.0, 100.0, 300.0, 400.0)));
    }

    #[test]
    fn test_hover_cursor_feedback() {
        let mut doc = document(800, 600);
        drag(&mut doc, (100.0, 100.0), (300.0, 400.0));

        assert_eq!(doc.hover(Point::new(100.0, 250.0)), HitRegion::Edge(Edge::Left));
        assert_eq!(doc.hover(Point::new(200.0, 250.0)), HitRegion::Interior);
        assert_eq!(doc.hover(Point::new(600.0, 250.0)), HitRegion::None);
    }
}
