//! Move controller: an exclusive drag session translating pointer movement
//! into a clamped position update on one element.
//!
//! The store is not touched while the pointer is held. [`MoveSession::preview`]
//! yields the unclamped live position for rendering; [`MoveSession::commit`]
//! yields the clamped update applied on release.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::doc::{Element, ElementId, PartialElement};
use crate::geometry::{Geometry, Point, clamp_position};

/// State captured when a drag starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSession {
    /// Element being dragged.
    pub id: ElementId,
    /// Element geometry at pointer-down.
    pub start: Geometry,
    /// Pointer position at pointer-down.
    pub pointer_start: Point,
    /// Most recent pointer position.
    pub pointer: Point,
}

impl MoveSession {
    /// Start dragging `el` from `pointer`.
    #[must_use]
    pub fn begin(el: &Element, pointer: Point) -> Self {
        Self { id: el.id, start: el.geometry(), pointer_start: pointer, pointer }
    }

    /// Pointer travel since the session started.
    #[must_use]
    pub fn delta(&self) -> Point {
        self.pointer - self.pointer_start
    }

    /// Record a pointer move.
    pub fn track(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Live geometry for rendering. Not clamped.
    #[must_use]
    pub fn preview(&self) -> Geometry {
        let d = self.delta();
        Geometry { x: self.start.x.saturating_add(d.x), y: self.start.y.saturating_add(d.y), ..self.start }
    }

    /// Final position update, clamped onto a canvas of `canvas_width`.
    #[must_use]
    pub fn commit(&self, canvas_width: i64) -> PartialElement {
        let live = self.preview();
        let (x, y) = clamp_position(live.x, live.y, self.start.width, canvas_width);
        PartialElement::position(x, y)
    }
}
