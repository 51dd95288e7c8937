use uuid::Uuid;

use super::*;
use crate::config::CanvasConfig;

fn el(x: i64) -> Element {
    Element { id: Uuid::new_v4(), x, y: 0, width: 200, height: 150, content: Content::Bio }
}

fn ids(order: &[&Element]) -> Vec<ElementId> {
    order.iter().map(|e| e.id).collect()
}

// =============================================================
// paint_order
// =============================================================

#[test]
fn paint_order_defaults_to_insertion_order() {
    let els = vec![el(0), el(10), el(20)];
    let order = paint_order(&els, None, None);
    assert_eq!(ids(&order), vec![els[0].id, els[1].id, els[2].id]);
}

#[test]
fn paint_order_lifts_selected_to_top() {
    let els = vec![el(0), el(10), el(20)];
    let order = paint_order(&els, Some(els[0].id), None);
    assert_eq!(ids(&order), vec![els[1].id, els[2].id, els[0].id]);
}

#[test]
fn paint_order_active_session_beats_selection() {
    let els = vec![el(0), el(10), el(20)];
    let order = paint_order(&els, Some(els[2].id), Some(els[0].id));
    assert_eq!(ids(&order), vec![els[1].id, els[2].id, els[0].id]);
}

#[test]
fn paint_order_active_and_selected_same_element() {
    let els = vec![el(0), el(10), el(20)];
    let order = paint_order(&els, Some(els[1].id), Some(els[1].id));
    assert_eq!(ids(&order), vec![els[0].id, els[2].id, els[1].id]);
}

#[test]
fn paint_order_does_not_reorder_source() {
    let els = vec![el(0), el(10)];
    let before: Vec<_> = els.iter().map(|e| e.id).collect();
    let _order = paint_order(&els, Some(els[0].id), None);
    let after: Vec<_> = els.iter().map(|e| e.id).collect();
    assert_eq!(before, after);
}

// =============================================================
// render_items
// =============================================================

#[test]
fn render_items_rank_and_selection_flags() {
    let mut store = ElementStore::new(CanvasConfig::default());
    let a = store.create(Geometry::new(0, 0, 200, 150), Content::Bio);
    let b = store.create(Geometry::new(0, 200, 300, 100), Content::Stats);
    store.select(Some(a));

    let items = render_items(&store, None);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, b);
    assert_eq!(items[0].z_rank, 0);
    assert!(!items[0].is_selected);
    assert_eq!(items[1].id, a);
    assert_eq!(items[1].z_rank, 1);
    assert!(items[1].is_selected);
    assert_eq!(items[1].kind, ElementKind::Bio);
}

#[test]
fn render_items_substitutes_live_geometry() {
    let mut store = ElementStore::new(CanvasConfig::default());
    let a = store.create(Geometry::new(0, 0, 200, 150), Content::Bio);
    let live = Geometry::new(40, 60, 200, 150);

    let items = render_items(&store, Some((a, live)));
    assert_eq!(items[0].geometry, live);
    assert_eq!(store.get(&a).unwrap().geometry(), Geometry::new(0, 0, 200, 150));
}

#[test]
fn render_items_empty_store() {
    let store = ElementStore::new(CanvasConfig::default());
    assert!(render_items(&store, None).is_empty());
}
