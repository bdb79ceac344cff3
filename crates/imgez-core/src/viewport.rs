//! Mapping between widget (screen) coordinates and image coordinates.
//!
//! The image is displayed scaled to fit the widget with its aspect ratio
//! preserved and centered, leaving letterbox bars on one axis. Pointer
//! events arrive in screen coordinates; the selection lives in image
//! coordinates.

use crate::geometry::{Point, Rect};

/// Fit-to-widget transform for one image in one widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    widget_width: f64,
    widget_height: f64,
    image_width: u32,
    image_height: u32,
    scale: f64,
    offset: Point,
    /// False for the identity mapping, which follows the image size.
    fitted: bool,
}

impl Viewport {
    /// Fit an `image_width x image_height` image into a widget.
    ///
    /// A widget with no area falls back to the identity mapping. Without an
    /// image yet, the widget size is kept at scale 1 so that
    /// [`with_image_size`](Self::with_image_size) fits the first image.
    pub fn new(widget_width: f64, widget_height: f64, image_width: u32, image_height: u32) -> Self {
        if widget_width <= 0.0 || widget_height <= 0.0 {
            return Self::identity(image_width, image_height);
        }
        if image_width == 0 || image_height == 0 {
            return Self {
                widget_width,
                widget_height,
                image_width,
                image_height,
                scale: 1.0,
                offset: Point::default(),
                fitted: true,
            };
        }

        let scale = (widget_width / image_width as f64).min(widget_height / image_height as f64);
        let shown_w = image_width as f64 * scale;
        let shown_h = image_height as f64 * scale;

        Self {
            widget_width,
            widget_height,
            image_width,
            image_height,
            scale,
            offset: Point::new((widget_width - shown_w) / 2.0, (widget_height - shown_h) / 2.0),
            fitted: true,
        }
    }

    /// One screen pixel per image pixel, no offset.
    pub fn identity(image_width: u32, image_height: u32) -> Self {
        Self {
            widget_width: image_width as f64,
            widget_height: image_height as f64,
            image_width,
            image_height,
            scale: 1.0,
            offset: Point::default(),
            fitted: false,
        }
    }

    /// Same widget, new image (after load, crop or rotate).
    pub fn with_image_size(&self, image_width: u32, image_height: u32) -> Self {
        if self.fitted {
            Self::new(self.widget_width, self.widget_height, image_width, image_height)
        } else {
            Self::identity(image_width, image_height)
        }
    }

    /// Screen pixels per image pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_image(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    pub fn to_screen(&self, image: Point) -> Point {
        Point::new(
            image.x * self.scale + self.offset.x,
            image.y * self.scale + self.offset.y,
        )
    }

    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        Rect::from_points(
            self.to_screen(rect.origin()),
            self.to_screen(Point::new(rect.right(), rect.bottom())),
        )
    }

    /// Where the image is drawn inside the widget.
    pub fn image_rect_on_screen(&self) -> Rect {
        self.rect_to_screen(&Rect::from_size(self.image_width, self.image_height))
    }

    /// True if a screen point falls on the displayed image.
    pub fn contains_screen(&self, screen: Point) -> bool {
        self.image_rect_on_screen().contains(screen)
    }
}
