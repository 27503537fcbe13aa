#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// =============================================================
// Construction and copies
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn copy_is_independent() {
    let p = Point::new(1.0, 2.0);
    let mut q = p.copy();
    q.translate_xy(5.0, 5.0);
    assert_eq!(p, Point::new(1.0, 2.0));
    assert_eq!(q, Point::new(6.0, 7.0));
}

#[test]
fn copy_translated_leaves_self() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(p.copy_translated_xy(3.0, -1.0), Point::new(4.0, 1.0));
    assert_eq!(p.copy_translated(&Point::new(-1.0, -2.0)), Point::new(0.0, 0.0));
    assert_eq!(p, Point::new(1.0, 2.0));
}

#[test]
fn copy_reduced_floors() {
    let p = Point::new(7.0, -7.0);
    assert_eq!(p.copy_reduced(2.0), Point::new(3.0, -4.0));
}

#[test]
fn copy_scaled_floors() {
    let p = Point::new(3.0, 5.0);
    assert_eq!(p.copy_scaled(0.5), Point::new(1.0, 2.0));
    assert_eq!(p.copy_scaled(2.0), Point::new(6.0, 10.0));
}

// =============================================================
// In-place chaining
// =============================================================

#[test]
fn set_to_overwrites() {
    let mut p = Point::new(1.0, 1.0);
    p.set_to_xy(9.0, 8.0);
    assert_eq!(p, Point::new(9.0, 8.0));
    p.set_to(&Point::new(-1.0, 0.5));
    assert_eq!(p, Point::new(-1.0, 0.5));
}

#[test]
fn translate_chains() {
    let mut p = Point::new(0.0, 0.0);
    p.translate_xy(1.0, 2.0).translate(&Point::new(3.0, 4.0)).translate_xy(-1.0, 0.0);
    assert_eq!(p, Point::new(3.0, 6.0));
}

#[test]
fn reduce_and_scale_in_place() {
    let mut p = Point::new(10.0, 15.0);
    p.reduce(4.0);
    assert_eq!(p, Point::new(2.0, 3.0));
    p.scale(1.5);
    assert_eq!(p, Point::new(3.0, 4.0));
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn clamp_x_inclusive_bounds() {
    let mut p = Point::new(-5.0, 0.0);
    p.clamp_x(0.0, 10.0);
    assert_eq!(p.x, 0.0);
    p.set_to_xy(10.0, 0.0).clamp_x(0.0, 10.0);
    assert_eq!(p.x, 10.0);
    p.set_to_xy(15.0, 0.0).clamp_x(0.0, 10.0);
    assert_eq!(p.x, 10.0);
}

#[test]
fn clamp_y_inclusive_bounds() {
    let mut p = Point::new(0.0, 42.0);
    p.clamp_y(-1.0, 1.0);
    assert_eq!(p.y, 1.0);
}

#[test]
fn clamp_inverted_range_checks_max_first() {
    // min = 10, max = 0: anything above 0 lands on max.
    let mut p = Point::new(5.0, 0.0);
    p.clamp_x(10.0, 0.0);
    assert_eq!(p.x, 0.0);

    // A value not above max but below min lands on min.
    let mut q = Point::new(-3.0, 0.0);
    q.clamp_x(10.0, 0.0);
    assert_eq!(q.x, 10.0);
}

#[test]
fn clamp_to_stage_uses_last_pixel() {
    let mut p = Point::new(900.0, -20.0);
    p.clamp_to_stage(800.0, 600.0);
    assert_eq!(p, Point::new(799.0, 0.0));
}

// =============================================================
// Queries
// =============================================================

#[test]
fn equals_is_exact() {
    let p = Point::new(1.0, 2.0);
    assert!(p.equals(&Point::new(1.0, 2.0)));
    assert!(p.equals_xy(1.0, 2.0));
    assert!(!p.equals_xy(1.0, 2.000_000_1));
}

#[test]
fn point_at_angle_zero_is_right() {
    let p = Point::new(10.0, 10.0).point_at_angle(0.0, 5.0);
    assert!(point_approx_eq(p, Point::new(15.0, 10.0)));
}

#[test]
fn point_at_angle_ninety_is_down() {
    let p = Point::new(0.0, 0.0).point_at_angle(90.0, 3.0);
    assert!(point_approx_eq(p, Point::new(0.0, 3.0)));
}

#[test]
fn angle_to_is_clockwise_from_right() {
    let o = Point::new(0.0, 0.0);
    assert!(approx_eq(o.angle_to_xy(1.0, 0.0), 0.0));
    assert!(approx_eq(o.angle_to_xy(0.0, 1.0), 90.0));
    assert!(approx_eq(o.angle_to_xy(-1.0, 0.0), 180.0));
    assert!(approx_eq(o.angle_to_xy(0.0, -1.0), 270.0));
}

#[test]
fn angle_to_inverts_point_at_angle() {
    let o = Point::new(3.0, -2.0);
    for step in 0..36 {
        let angle = f64::from(step) * 10.0;
        let target = o.point_at_angle(angle, 7.0);
        assert!(approx_eq(o.angle_to(&target), angle), "angle {angle}");
        assert!(approx_eq(o.distance(&target), 7.0));
    }
}

#[test]
fn distance_three_four_five() {
    let p = Point::new(0.0, 0.0);
    assert_eq!(p.distance_xy(3.0, 4.0), 5.0);
    assert_eq!(p.distance_squared(&Point::new(3.0, 4.0)), 25.0);
}

#[test]
fn to_array_and_from_array() {
    let p = Point::new(1.5, -2.5);
    assert_eq!(p.to_array(), [1.5, -2.5]);
    assert_eq!(Point::from([1.5, -2.5]), p);
}

#[test]
fn point_serializes_as_xy_object() {
    let json = serde_json::to_value(Point::new(1.0, 2.0)).unwrap();
    assert_eq!(json, serde_json::json!({"x": 1.0, "y": 2.0}));
}

// =============================================================
// normalize_degrees
// =============================================================

#[test]
fn normalize_degrees_folds_into_range() {
    assert_eq!(normalize_degrees(0.0), 0.0);
    assert_eq!(normalize_degrees(360.0), 0.0);
    assert_eq!(normalize_degrees(370.0), 10.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(-720.0), 0.0);
}

#[test]
fn normalize_degrees_tiny_negative_stays_below_full_turn() {
    let d = normalize_degrees(-1e-15);
    assert!((0.0..360.0).contains(&d));
}
