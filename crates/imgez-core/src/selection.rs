//! The selection rectangle and its geometric edits.
//!
//! All coordinates are in image space. The rectangle is kept normalized and
//! inside `bounds` (the image extent) after every operation; a rectangle with
//! no area counts as "no selection".
//!
//! Hit-testing is the one operation done in screen space, so the grab
//! tolerance stays the same number of screen pixels at any zoom level.

use crate::geometry::{Corner, Edge, HitRegion, Point, Rect, Vector};
use crate::viewport::Viewport;

/// Rectangular selection over the current image.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    rect: Rect,
    /// Fixed corner while drawing a new rectangle.
    anchor: Point,
    bounds: Rect,
    min_size: f64,
}

impl Selection {
    /// An empty selection over `bounds`.
    ///
    /// `min_size` is the smallest width/height an edge drag may shrink the
    /// rectangle to.
    pub fn new(bounds: Rect, min_size: f64) -> Self {
        Self {
            rect: Rect::from_points(bounds.origin(), bounds.origin()),
            anchor: bounds.origin(),
            bounds,
            min_size: min_size.max(0.0),
        }
    }

    /// Replace the bounds (the image changed); the selection is cleared.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.clear();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Start a new rectangle with both corners at `point`.
    pub fn begin_at(&mut self, point: Point) {
        let point = self.bounds.clamp_point(point);
        self.anchor = point;
        self.rect = Rect::from_points(point, point);
    }

    /// Move the free corner of a rectangle being drawn.
    pub fn resize_to(&mut self, point: Point) {
        self.rect = Rect::from_points(self.anchor, self.bounds.clamp_point(point));
    }

    /// Move one edge to `coordinate` (an `x` for left/right, a `y` for
    /// top/bottom).
    ///
    /// The edge stops at the image bounds and at `min_size` from the opposite
    /// edge, so the rectangle never inverts.
    pub fn move_edge(&mut self, edge: Edge, coordinate: f64) {
        let r = self.rect;
        let b = self.bounds;
        let gap_x = self.min_size.min(r.width());
        let gap_y = self.min_size.min(r.height());

        self.rect = match edge {
            Edge::Left => {
                let left = clamp_low(coordinate, b.left(), r.right() - gap_x);
                Rect::new(left, r.top(), r.right(), r.bottom())
            }
            Edge::Right => {
                let right = clamp_high(coordinate, r.left() + gap_x, b.right());
                Rect::new(r.left(), r.top(), right, r.bottom())
            }
            Edge::Top => {
                let top = clamp_low(coordinate, b.top(), r.bottom() - gap_y);
                Rect::new(r.left(), top, r.right(), r.bottom())
            }
            Edge::Bottom => {
                let bottom = clamp_high(coordinate, r.top() + gap_y, b.bottom());
                Rect::new(r.left(), r.top(), r.right(), bottom)
            }
        };
    }

    /// Move `corner` to `point`, keeping the opposite corner fixed.
    ///
    /// Dragging past the opposite corner re-normalizes the rectangle rather
    /// than inverting it. Returns the corner the pointer holds afterwards,
    /// which differs from `corner` once the drag has crossed over.
    pub fn move_corner(&mut self, corner: Corner, point: Point) -> Corner {
        let anchor = self.rect.corner(corner.opposite());
        let point = self.bounds.clamp_point(point);
        self.rect = Rect::from_points(anchor, point);
        Corner::relative_to(anchor, point)
    }

    /// Shift the whole rectangle by `delta`, stopping at the image bounds
    /// without changing its size.
    pub fn translate(&mut self, delta: Vector) {
        let r = self.rect;
        let b = self.bounds;
        let left = clamp_low(r.left() + delta.dx, b.left(), b.right() - r.width());
        let top = clamp_low(r.top() + delta.dy, b.top(), b.bottom() - r.height());
        self.rect = Rect::new(
            left,
            top,
            (left + r.width()).min(b.right()),
            (top + r.height()).min(b.bottom()),
        );
    }

    /// Classify a screen position against the selection.
    ///
    /// `tolerance` is the half-width, in screen pixels, of the grab band
    /// around each edge. Corners win over edges; `Interior` is reported only
    /// away from every edge.
    pub fn hit_test(&self, screen: Point, viewport: &Viewport, tolerance: f64) -> HitRegion {
        if !self.is_active() || !viewport.contains_screen(screen) {
            return HitRegion::None;
        }

        let tol = tolerance.max(0.0);
        let r = viewport.rect_to_screen(&self.rect);
        let band = Rect::new(r.left() - tol, r.top() - tol, r.right() + tol, r.bottom() + tol);
        if !band.contains(screen) {
            return HitRegion::None;
        }

        let horizontal = nearest_side(screen.x, r.left(), r.right(), tol);
        let vertical = nearest_side(screen.y, r.top(), r.bottom(), tol);

        match (horizontal, vertical) {
            (Some(Side::Low), Some(Side::Low)) => HitRegion::Corner(Corner::TopLeft),
            (Some(Side::High), Some(Side::Low)) => HitRegion::Corner(Corner::TopRight),
            (Some(Side::Low), Some(Side::High)) => HitRegion::Corner(Corner::BottomLeft),
            (Some(Side::High), Some(Side::High)) => HitRegion::Corner(Corner::BottomRight),
            (Some(Side::Low), None) => HitRegion::Edge(Edge::Left),
            (Some(Side::High), None) => HitRegion::Edge(Edge::Right),
            (None, Some(Side::Low)) => HitRegion::Edge(Edge::Top),
            (None, Some(Side::High)) => HitRegion::Edge(Edge::Bottom),
            (None, None) if r.contains(screen) => HitRegion::Interior,
            (None, None) => HitRegion::None,
        }
    }

    /// Reset to an empty selection.
    pub fn clear(&mut self) {
        let origin = self.bounds.origin();
        self.anchor = origin;
        self.rect = Rect::from_points(origin, origin);
    }

    /// True iff the rectangle has area.
    pub fn is_active(&self) -> bool {
        !self.rect.is_degenerate()
    }

    /// The selected rectangle, if any.
    pub fn rect(&self) -> Option<Rect> {
        self.is_active().then_some(self.rect)
    }

    /// The rectangle as it currently stands, even if degenerate.
    pub fn raw_rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Low,
    High,
}

/// Which of two parallel edges `value` is within `tol` of, preferring the
/// closer one when the rectangle is thinner than the band.
fn nearest_side(value: f64, low: f64, high: f64, tol: f64) -> Option<Side> {
    let d_low = (value - low).abs();
    let d_high = (value - high).abs();
    match (d_low <= tol, d_high <= tol) {
        (true, true) if d_high < d_low => Some(Side::High),
        (true, _) => Some(Side::Low),
        (false, true) => Some(Side::High),
        (false, false) => None,
    }
}

/// Clamp where the lower limit wins if the limits cross.
fn clamp_low(value: f64, low: f64, high: f64) -> f64 {
    value.min(high).max(low)
}

/// Clamp where the upper limit wins if the limits cross.
fn clamp_high(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
