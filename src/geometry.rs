//! Screen-space rectangle model and the horizontal-band test.
//!
//! Rectangles are immutable snapshots taken fresh for every query; nothing
//! here is cached across calls.

/// Fraction of the current window's height within which a sibling's vertical
/// center must lie to count as a left/right neighbor.
pub const BAND_RATIO: f64 = 0.75;

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A window frame in screen coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn midpoint(&self) -> Point {
        Point {
            x: self.mid_x(),
            y: self.mid_y(),
        }
    }
}

/// Signed horizontal distance from the center of `a` to the center of `b`.
/// Positive when `b` lies to the east.
pub fn horizontal_delta(a: &Rect, b: &Rect) -> f64 {
    b.mid_x() - a.mid_x()
}

/// Absolute vertical distance between the centers of `a` and `b`.
pub fn vertical_offset(a: &Rect, b: &Rect) -> f64 {
    (b.mid_y() - a.mid_y()).abs()
}

/// Whether `b` sits in the horizontal band of `a`.
///
/// Keeps windows stacked vertically from being treated as left/right
/// neighbors.
pub fn in_band(a: &Rect, b: &Rect) -> bool {
    vertical_offset(a, b) <= BAND_RATIO * a.height
}
