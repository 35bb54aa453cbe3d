#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_new_stores_coordinates() {
    let p = Point::new(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn new_viewport_has_zero_origin() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.origin_x, 0.0);
    assert_eq!(vp.origin_y, 0.0);
    assert_eq!(vp.width, 800.0);
    assert_eq!(vp.height, 600.0);
}

#[test]
fn zero_origin_is_identity() {
    let vp = Viewport::new(800.0, 600.0);
    let p = Point::new(123.0, 45.0);
    assert_eq!(vp.screen_to_scene(p), p);
}

#[test]
fn screen_to_scene_subtracts_origin() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_origin(10.0, 120.0);
    let scene = vp.screen_to_scene(Point::new(65.0, 175.0));
    assert_eq!(scene, Point::new(55.0, 55.0));
}

#[test]
fn points_left_of_origin_map_to_negative_scene_coordinates() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_origin(100.0, 100.0);
    let scene = vp.screen_to_scene(Point::new(40.0, 90.0));
    assert_eq!(scene, Point::new(-60.0, -10.0));
}

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(-3.5, 1e300).is_finite());
    assert!(!Point::new(f64::NAN, 0.0).is_finite());
    assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
}
