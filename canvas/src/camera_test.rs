#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_midpoint() {
    let mid = Point::new(-10.0, 4.0).midpoint(Point::new(10.0, 8.0));
    assert!(point_approx_eq(mid, Point::new(0.0, 6.0)));
}

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

// --- Rect ---

#[test]
fn rect_union_all_empty_is_none() {
    assert!(Rect::union_all(&[]).is_none());
}

#[test]
fn rect_union_all_covers_every_rect() {
    let u = Rect::union_all(&[Rect::new(10.0, 10.0, 20.0, 20.0), Rect::new(-5.0, 40.0, 10.0, 5.0)]);
    assert_eq!(u, Some(Rect::new(-5.0, 10.0, 35.0, 35.0)));
}

#[test]
fn rect_is_finite() {
    assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_finite());
    assert!(!Rect::new(0.0, 0.0, f64::NAN, 1.0).is_finite());
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_identity() {
    let cam = Camera::default();
    let world = cam.screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 4.0 };
    let world = cam.screen_to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 20.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 50.0, pan_y: 30.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(0.0, 0.0));
    assert!(approx_eq(world.x, -25.0));
    assert!(approx_eq(world.y, -15.0));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    // 5*3 + 20 = 35, 5*3 + 10 = 25
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

#[test]
fn round_trip_screen_first() {
    let cam = Camera { pan_x: 13.7, pan_y: -42.3, zoom: 0.75 };
    let screen = Point::new(400.0, 300.0);
    let back = cam.world_to_screen(cam.screen_to_world(screen));
    assert!(point_approx_eq(screen, back));
}

// --- screen_dist_to_world ---

#[test]
fn screen_dist_to_world_ignores_pan() {
    let cam = Camera { pan_x: 999.0, pan_y: -999.0, zoom: 4.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 2.0));
}

// --- visible_world_rect ---

#[test]
fn visible_world_rect_at_identity_matches_viewport() {
    let rect = Camera::default().visible_world_rect(800.0, 600.0);
    assert_eq!(rect, Rect::new(0.0, 0.0, 800.0, 600.0));
}

#[test]
fn visible_world_rect_shrinks_when_zoomed_in() {
    let cam = Camera { pan_x: -400.0, pan_y: -300.0, zoom: 2.0 };
    let rect = cam.visible_world_rect(800.0, 600.0);
    assert!(approx_eq(rect.x, 200.0));
    assert!(approx_eq(rect.y, 150.0));
    assert!(approx_eq(rect.width, 400.0));
    assert!(approx_eq(rect.height, 300.0));
}

// --- Host output ---

#[test]
fn css_transform_formats_translate_then_scale() {
    let cam = Camera { pan_x: -400.0, pan_y: 12.5, zoom: 2.0 };
    assert_eq!(cam.css_transform(), "translate(-400px, 12.5px) scale(2)");
}

#[test]
fn matrix_is_uniform_scale_plus_translation() {
    let cam = Camera { pan_x: 7.0, pan_y: -3.0, zoom: 0.5 };
    assert_eq!(cam.matrix(), [0.5, 0.0, 0.0, 0.5, 7.0, -3.0]);
}

#[test]
fn zoom_percent_rounds() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 0.7407 };
    assert_eq!(cam.zoom_percent(), 74.0);
}

// --- Serialization ---

#[test]
fn camera_serializes_as_scale_pan_x_pan_y() {
    let cam = Camera { pan_x: 1.5, pan_y: -2.0, zoom: 3.0 };
    let value = serde_json::to_value(cam).unwrap();
    assert_eq!(value, serde_json::json!({ "scale": 3.0, "panX": 1.5, "panY": -2.0 }));
}

#[test]
fn camera_deserializes_from_flat_view_state() {
    let cam: Camera = serde_json::from_str(r#"{"scale":0.74,"panX":-10,"panY":95.5}"#).unwrap();
    assert_eq!(cam, Camera { pan_x: -10.0, pan_y: 95.5, zoom: 0.74 });
}
