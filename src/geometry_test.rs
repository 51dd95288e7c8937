use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_sub_yields_delta() {
    assert_eq!(Point::new(130, 40) - Point::new(100, 60), Point::new(30, -20));
}

#[test]
fn point_add_applies_delta() {
    assert_eq!(Point::new(10, 10) + Point::new(-5, 7), Point::new(5, 17));
}

#[test]
fn point_arithmetic_saturates() {
    assert_eq!(Point::new(i64::MIN, 0) - Point::new(1, i64::MIN), Point::new(i64::MIN, i64::MAX));
    assert_eq!(Point::new(i64::MAX, i64::MIN) + Point::new(1, -1), Point::new(i64::MAX, i64::MIN));
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn geometry_edges() {
    let g = Geometry::new(10, 20, 200, 150);
    assert_eq!(g.right(), 210);
    assert_eq!(g.bottom(), 170);
}

#[test]
fn geometry_contains_includes_edges() {
    let g = Geometry::new(10, 20, 200, 150);
    assert!(g.contains(Point::new(10, 20)));
    assert!(g.contains(Point::new(210, 170)));
    assert!(g.contains(Point::new(100, 100)));
    assert!(!g.contains(Point::new(9, 100)));
    assert!(!g.contains(Point::new(100, 171)));
}

// =============================================================
// clamp_position
// =============================================================

#[test]
fn clamp_position_inside_is_identity() {
    assert_eq!(clamp_position(100, 300, 200, 1000), (100, 300));
}

#[test]
fn clamp_position_negative_x_pins_to_zero() {
    assert_eq!(clamp_position(-100, 0, 300, 1000), (0, 0));
}

#[test]
fn clamp_position_overflowing_right_edge() {
    assert_eq!(clamp_position(950, 10, 200, 1000), (800, 10));
}

#[test]
fn clamp_position_negative_y_pins_to_zero() {
    assert_eq!(clamp_position(10, -40, 200, 1000), (10, 0));
}

#[test]
fn clamp_position_has_no_lower_bound_on_y() {
    assert_eq!(clamp_position(0, 1_000_000, 200, 1000), (0, 1_000_000));
}

#[test]
fn clamp_position_wider_than_canvas_pins_left() {
    assert_eq!(clamp_position(500, 0, 1200, 1000), (0, 0));
}

#[test]
fn clamp_position_keeps_right_edge_inside_for_any_x() {
    for x in (-2000..=2000).step_by(37) {
        let (cx, _) = clamp_position(x, 0, 200, 1000);
        assert!(cx >= 0);
        assert!(cx + 200 <= 1000);
    }
}

// =============================================================
// clamp_size
// =============================================================

#[test]
fn clamp_size_inside_is_identity() {
    assert_eq!(clamp_size(200, 150, 50, 1000), (200, 150));
}

#[test]
fn clamp_size_raises_to_minimum() {
    assert_eq!(clamp_size(10, -30, 50, 1000), (50, 50));
}

#[test]
fn clamp_size_caps_width_only() {
    assert_eq!(clamp_size(1500, 5000, 50, 100), (100, 5000));
}

#[test]
fn clamp_size_minimum_beats_maximum() {
    assert_eq!(clamp_size(200, 200, 50, 20), (50, 200));
}

#[test]
fn clamp_position_extreme_inputs() {
    assert_eq!(clamp_position(i64::MIN, i64::MIN, 200, 1000), (0, 0));
    assert_eq!(clamp_position(i64::MAX, i64::MAX, 200, 1000), (800, i64::MAX));
    assert_eq!(clamp_position(0, 0, i64::MAX, i64::MIN), (0, 0));
}
