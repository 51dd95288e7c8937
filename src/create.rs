//! Creation controller: turns a palette drop into a new element centered on
//! the drop point, with per-type default size and content.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use crate::doc::{Content, ElementId, ElementKind, ElementStore};
use crate::geometry::{Geometry, Point};

/// Default geometry for a `kind` dropped at canvas-local `drop`.
///
/// Not clamped; the store clamps on create.
#[must_use]
pub fn drop_geometry(kind: ElementKind, drop: Point) -> Geometry {
    let (width, height) = kind.default_size();
    Geometry::new(drop.x.saturating_sub(width / 2), drop.y.saturating_sub(height / 2), width, height)
}

/// Create a `kind` element for a drop at `client`, where `origin` is the
/// canvas's top-left in the same coordinate space.
///
/// Drops outside the canvas are clamped, never rejected.
pub fn drop_element(store: &mut ElementStore, kind: ElementKind, client: Point, origin: Point) -> ElementId {
    let local = client - origin;
    store.create(drop_geometry(kind, local), Content::default_for(kind))
}
