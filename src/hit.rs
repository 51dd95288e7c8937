//! Pointer targets: what a pointer event landed on, and how to resolve a
//! canvas point into one.
//!
//! DOM hosts usually know the target already (a drag grip, an embedded input,
//! a handle element) and pass a [`Target`] straight to the engine. Hosts
//! without a DOM can call [`hit_test`] against the current paint order.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::consts::HANDLE_RADIUS;
use crate::doc::ElementId;
use crate::geometry::{Geometry, Point};
use crate::order::RenderItem;

/// One of the six resize handles drawn on the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Midpoint of the right edge.
    Right,
    /// Midpoint of the bottom edge.
    Bottom,
}

impl Handle {
    pub const ALL: [Handle; 6] =
        [Self::TopLeft, Self::TopRight, Self::BottomLeft, Self::BottomRight, Self::Right, Self::Bottom];

    /// Where the handle sits on an element with geometry `g`.
    #[must_use]
    pub fn position(self, g: &Geometry) -> Point {
        match self {
            Self::TopLeft => Point::new(g.x, g.y),
            Self::TopRight => Point::new(g.right(), g.y),
            Self::BottomLeft => Point::new(g.x, g.bottom()),
            Self::BottomRight => Point::new(g.right(), g.bottom()),
            Self::Right => Point::new(g.right(), g.y.saturating_add(g.height / 2)),
            Self::Bottom => Point::new(g.x.saturating_add(g.width / 2), g.bottom()),
        }
    }

    /// CSS cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::TopLeft | Self::BottomRight => "nwse-resize",
            Self::TopRight | Self::BottomLeft => "nesw-resize",
            Self::Right => "ew-resize",
            Self::Bottom => "ns-resize",
        }
    }
}

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// The element body; a click selects the element.
    Body,
    /// An interactive sub-control (input, textarea, select, button, or a node
    /// flagged as self-interactive). Clicks pass through to it.
    Control,
    /// The drag affordance; pointer-down starts a move.
    DragHandle,
    /// A resize handle; pointer-down starts a resize.
    ResizeHandle(Handle),
}

/// What a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "on")]
pub enum Target {
    /// Empty canvas area.
    Canvas,
    /// Some part of a placed element.
    Element { id: ElementId, part: Part },
}

impl Target {
    #[must_use]
    pub fn element(id: ElementId, part: Part) -> Self {
        Self::Element { id, part }
    }
}

/// Resolve a canvas-local point against `items`, which must be in paint
/// order (bottom first).
///
/// Resize handles of the selected element win over any body; otherwise the
/// topmost body containing the point is hit. Drag handles and sub-controls are
/// never produced here since their placement belongs to the renderer.
#[must_use]
pub fn hit_test(pt: Point, items: &[RenderItem<'_>]) -> Target {
    let near = |a: i64, b: i64| a.abs_diff(b) <= HANDLE_RADIUS.unsigned_abs();
    if let Some(sel) = items.iter().find(|item| item.is_selected) {
        for handle in Handle::ALL {
            let hp = handle.position(&sel.geometry);
            if near(pt.x, hp.x) && near(pt.y, hp.y) {
                return Target::element(sel.id, Part::ResizeHandle(handle));
            }
        }
    }

    items
        .iter()
        .rev()
        .find(|item| item.geometry.contains(pt))
        .map_or(Target::Canvas, |item| Target::element(item.id, Part::Body))
}
