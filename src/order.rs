//! Selection and z-order policy.
//!
//! Paint order is derived, never stored: the element under an active move or
//! resize paints on top, the selected element paints above the rest, and
//! everything else follows store insertion order. Hit-testing walks the same
//! order from the top.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use crate::doc::{Content, Element, ElementId, ElementKind, ElementStore};
use crate::geometry::Geometry;

/// Everything a renderer needs to paint one element.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem<'a> {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Geometry to draw; the live preview while the element is in a session.
    pub geometry: Geometry,
    pub content: &'a Content,
    /// Selection chrome and resize handles are drawn only when set.
    pub is_selected: bool,
    /// Position in paint order; 0 paints first (bottom).
    pub z_rank: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    Resting,
    Selected,
    Interacting,
}

fn tier(id: ElementId, selected: Option<ElementId>, active: Option<ElementId>) -> Tier {
    if active == Some(id) {
        Tier::Interacting
    } else if selected == Some(id) {
        Tier::Selected
    } else {
        Tier::Resting
    }
}

/// Elements sorted bottom-to-top. The sort is stable, so elements in the same
/// tier keep insertion order.
#[must_use]
pub fn paint_order<'a>(elements: &'a [Element], selected: Option<ElementId>, active: Option<ElementId>) -> Vec<&'a Element> {
    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|el| tier(el.id, selected, active));
    ordered
}

/// Build render items in paint order. `active` names the element under a
/// session together with its live geometry.
#[must_use]
pub fn render_items(store: &ElementStore, active: Option<(ElementId, Geometry)>) -> Vec<RenderItem<'_>> {
    let selected = store.selection();
    let active_id = active.map(|(id, _)| id);
    paint_order(store.list(), selected, active_id)
        .into_iter()
        .enumerate()
        .map(|(z_rank, el)| RenderItem {
            id: el.id,
            kind: el.kind(),
            geometry: match active {
                Some((id, live)) if id == el.id => live,
                _ => el.geometry(),
            },
            content: &el.content,
            is_selected: selected == Some(el.id),
            z_rank,
        })
        .collect()
}
