//! Geometry primitives shared by the selection model, viewport and controller.
//!
//! # Coordinate System
//!
//! - Image space: `f64` pixel units, origin at the top-left corner of the
//!   current image, `x` grows to the right and `y` grows downwards
//! - Screen space: the same orientation, in widget pixels
//! - A [`Rect`] is always normalized (`left <= right`, `top <= bottom`)

use serde::{Deserialize, Serialize};

/// A position in image or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`.
    pub fn offset_from(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// One of the four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// True for edges whose coordinate is an `x` value.
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }
}

/// One of the four corners of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// The corner that `point` occupies relative to `anchor`.
    ///
    /// Ties resolve towards the right/bottom so a zero-width drag keeps a
    /// stable identity.
    pub fn relative_to(anchor: Point, point: Point) -> Corner {
        match (point.x < anchor.x, point.y < anchor.y) {
            (true, true) => Corner::TopLeft,
            (false, true) => Corner::TopRight,
            (true, false) => Corner::BottomLeft,
            (false, false) => Corner::BottomRight,
        }
    }
}

/// Classification of a pointer position against a selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HitRegion {
    #[default]
    None,
    Edge(Edge),
    Corner(Corner),
    Interior,
}

/// Cursor shape a front end should show for a hover position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
    ResizeHorizontal,
    ResizeVertical,
    /// Diagonal from top-left to bottom-right.
    ResizeNwSe,
    /// Diagonal from top-right to bottom-left.
    ResizeNeSw,
}

impl HitRegion {
    pub fn cursor(self) -> CursorIcon {
        match self {
            HitRegion::None => CursorIcon::Default,
            HitRegion::Interior => CursorIcon::Move,
            HitRegion::Edge(Edge::Left | Edge::Right) => CursorIcon::ResizeHorizontal,
            HitRegion::Edge(Edge::Top | Edge::Bottom) => CursorIcon::ResizeVertical,
            HitRegion::Corner(Corner::TopLeft | Corner::BottomRight) => CursorIcon::ResizeNwSe,
            HitRegion::Corner(Corner::TopRight | Corner::BottomLeft) => CursorIcon::ResizeNeSw,
        }
    }
}

/// An axis-aligned rectangle with normalized bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    /// Build a rectangle from any two bounds per axis; the result is normalized.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Rectangle spanned by two opposite corners given in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Rectangle covering an image of the given size.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// A rectangle with no area counts as "no selection".
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.left, self.top),
            Corner::TopRight => Point::new(self.right, self.top),
            Corner::BottomLeft => Point::new(self.left, self.bottom),
            Corner::BottomRight => Point::new(self.right, self.bottom),
        }
    }

    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// True if `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Overlap of two rectangles, or `None` when they share no area.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left < right && top < bottom {
            Some(Rect { left, top, right, bottom })
        } else {
            None
        }
    }

    /// Nearest point inside the rectangle.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.left, self.right),
            point.y.clamp(self.top, self.bottom),
        )
    }

    /// Whole-pixel region of this rectangle inside an image of the given size.
    ///
    /// Bounds are rounded to the nearest pixel and clamped to the image;
    /// returns `None` when nothing of the image remains.
    pub fn to_pixel_rect(&self, width: u32, height: u32) -> Option<PixelRect> {
        let round = |v: f64, max: u32| v.round().clamp(0.0, max as f64) as u32;
        let left = round(self.left, width);
        let top = round(self.top, height);
        let right = round(self.right, width);
        let bottom = round(self.bottom, height);
        if right <= left || bottom <= top {
            return None;
        }
        Some(PixelRect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        })
    }
}

/// A whole-pixel region of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}
