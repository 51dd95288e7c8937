use super::*;
use crate::config::CanvasConfig;

fn store() -> ElementStore {
    ElementStore::new(CanvasConfig::default())
}

#[test]
fn drop_geometry_centers_on_point() {
    assert_eq!(drop_geometry(ElementKind::Text, Point::new(500, 400)), Geometry::new(400, 325, 200, 150));
    assert_eq!(drop_geometry(ElementKind::Button, Point::new(500, 400)), Geometry::new(400, 370, 200, 60));
    assert_eq!(drop_geometry(ElementKind::Stats, Point::new(500, 400)), Geometry::new(350, 350, 300, 100));
}

#[test]
fn drop_subtracts_canvas_origin() {
    let mut s = store();
    let id = drop_element(&mut s, ElementKind::Bio, Point::new(640, 520), Point::new(140, 120));
    let el = s.get(&id).unwrap();
    assert_eq!((el.x, el.y), (400, 325));
}

#[test]
fn stats_drop_near_corner_clamps_to_origin() {
    let mut s = store();
    let id = drop_element(&mut s, ElementKind::Stats, Point::new(50, 50), Point::new(0, 0));
    let el = s.get(&id).unwrap();
    assert_eq!(el.geometry(), Geometry::new(0, 0, 300, 100));
    assert_eq!(el.content, Content::Stats);
}

#[test]
fn button_defaults() {
    let mut s = store();
    let id = drop_element(&mut s, ElementKind::Button, Point::new(300, 300), Point::new(0, 0));
    let el = s.get(&id).unwrap();
    assert_eq!((el.width, el.height), (200, 60));
    assert_eq!(el.content, Content::Button { label: "Click me".into(), url: String::new() });
}

#[test]
fn each_kind_gets_default_content() {
    let mut s = store();
    for kind in ElementKind::ALL {
        let id = drop_element(&mut s, kind, Point::new(500, 500), Point::new(0, 0));
        assert_eq!(s.get(&id).unwrap().content, Content::default_for(kind));
        assert_eq!(s.get(&id).unwrap().kind(), kind);
    }
}

#[test]
fn drop_selects_new_element() {
    let mut s = store();
    let id = drop_element(&mut s, ElementKind::Image, Point::new(500, 500), Point::new(0, 0));
    assert_eq!(s.selection(), Some(id));
}

#[test]
fn text_drop_anywhere_stays_on_canvas() {
    let mut s = store();
    for x in (-3000..=3000).step_by(173) {
        for y in (-2000..=2000).step_by(211) {
            let id = drop_element(&mut s, ElementKind::Text, Point::new(x, y), Point::new(0, 0));
            let el = s.get(&id).unwrap();
            assert!((0..=800).contains(&el.x), "drop ({x}, {y}) -> x={}", el.x);
            assert!(el.y >= 0, "drop ({x}, {y}) -> y={}", el.y);
        }
    }
}

#[test]
fn extreme_drops_clamp_without_overflow() {
    let mut s = store();
    let corners = [
        (Point::new(i64::MIN, i64::MIN), Point::new(0, 0)),
        (Point::new(0, 0), Point::new(i64::MAX, i64::MAX)),
        (Point::new(i64::MAX, i64::MAX), Point::new(i64::MIN, i64::MIN)),
    ];
    for (client, origin) in corners {
        for kind in ElementKind::ALL {
            let id = drop_element(&mut s, kind, client, origin);
            let el = s.get(&id).unwrap();
            assert!(el.x >= 0 && el.y >= 0, "{kind} at {client:?} - {origin:?}");
            assert!(el.x + el.width <= 1000, "{kind} at {client:?} - {origin:?}");
        }
    }
    let id = drop_element(&mut s, ElementKind::Text, Point::new(i64::MIN, i64::MIN), Point::new(0, 0));
    assert_eq!(s.get(&id).unwrap().geometry(), Geometry::new(0, 0, 200, 150));
}

#[test]
fn stats_drop_on_narrow_canvas_fits() {
    let canvas = CanvasConfig { width: 200, ..CanvasConfig::default() };
    let mut s = ElementStore::new(canvas);
    let id = drop_element(&mut s, ElementKind::Stats, Point::new(100, 100), Point::new(0, 0));
    let el = s.get(&id).unwrap();
    assert_eq!(el.geometry(), Geometry::new(0, 50, 200, 100));
}

#[test]
fn button_drop_honors_configured_min_size() {
    let canvas = CanvasConfig { min_size: 100, ..CanvasConfig::default() };
    let mut s = ElementStore::new(canvas);
    let id = drop_element(&mut s, ElementKind::Button, Point::new(500, 500), Point::new(0, 0));
    let el = s.get(&id).unwrap();
    assert_eq!((el.width, el.height), (200, 100));
}
