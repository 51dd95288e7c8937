//! Canvas-space points, element geometry, and the clamping rules that keep
//! elements inside the canvas.
//!
//! All coordinates are integer canvas units. The canvas is bounded
//! horizontally by its width and open-ended downward, so only `x` has an
//! upper bound.
//!
//! Pointer input is unbounded, so arithmetic on points and edges saturates
//! at the `i64` limits instead of overflowing.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in canvas-local (or, before origin subtraction, client) space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Position and size of an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Horizontal extent.
    pub width: i64,
    /// Vertical extent.
    pub height: i64,
}

impl Geometry {
    #[must_use]
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    /// Whether `pt` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }
}

/// Constrain a top-left position so an element of `width` stays within
/// `[0, canvas_width]` horizontally and below the top edge.
///
/// An element wider than the canvas is pinned to `x = 0`.
#[must_use]
pub fn clamp_position(x: i64, y: i64, width: i64, canvas_width: i64) -> (i64, i64) {
    (x.min(canvas_width.saturating_sub(width)).max(0), y.max(0))
}

/// Constrain a size to `[min_size, max_width]` horizontally and
/// `[min_size, ∞)` vertically.
///
/// The lower bound wins when `max_width < min_size`.
#[must_use]
pub fn clamp_size(width: i64, height: i64, min_size: i64, max_width: i64) -> (i64, i64) {
    (width.min(max_width).max(min_size), height.max(min_size))
}
