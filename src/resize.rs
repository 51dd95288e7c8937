//! Resize controller: an exclusive session translating pointer movement into
//! a clamped size update on the selected element.
//!
//! Every handle changes size only. The element's origin stays put, so the
//! left and top handles grow or shrink the element from its top-left corner
//! rather than anchoring the opposite corner.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::config::CanvasConfig;
use crate::doc::{Element, ElementId, PartialElement};
use crate::geometry::{Geometry, Point, clamp_size};
use crate::hit::Handle;

/// State captured when a resize starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    /// Element being resized.
    pub id: ElementId,
    /// Which handle is being dragged.
    pub handle: Handle,
    /// Element geometry at pointer-down.
    pub start: Geometry,
    /// Pointer position at pointer-down.
    pub pointer_start: Point,
    /// Last computed (clamped) width.
    pub width: i64,
    /// Last computed (clamped) height.
    pub height: i64,
}

impl ResizeSession {
    /// Start resizing `el` via `handle` from `pointer`.
    #[must_use]
    pub fn begin(el: &Element, handle: Handle, pointer: Point) -> Self {
        Self {
            id: el.id,
            handle,
            start: el.geometry(),
            pointer_start: pointer,
            width: el.width,
            height: el.height,
        }
    }

    /// Recompute the live size for a pointer at `pointer`.
    pub fn track(&mut self, pointer: Point, canvas: &CanvasConfig) {
        let d = pointer - self.pointer_start;
        let (w, h) = (self.start.width, self.start.height);
        let (w, h) = match self.handle {
            Handle::BottomRight => (w.saturating_add(d.x), h.saturating_add(d.y)),
            Handle::BottomLeft => (w.saturating_sub(d.x), h.saturating_add(d.y)),
            Handle::TopRight => (w.saturating_add(d.x), h.saturating_sub(d.y)),
            Handle::TopLeft => (w.saturating_sub(d.x), h.saturating_sub(d.y)),
            Handle::Right => (w.saturating_add(d.x), h),
            Handle::Bottom => (w, h.saturating_add(d.y)),
        };
        let max_width = canvas.width.saturating_sub(self.start.x);
        (self.width, self.height) = clamp_size(w, h, canvas.min_size, max_width);
    }

    /// Live geometry for rendering. The origin never moves.
    #[must_use]
    pub fn preview(&self) -> Geometry {
        Geometry { width: self.width, height: self.height, ..self.start }
    }

    /// Final size update.
    #[must_use]
    pub fn commit(&self) -> PartialElement {
        PartialElement::size(self.width, self.height)
    }
}
