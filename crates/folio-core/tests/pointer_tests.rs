// Host-side tests for pointer normalization and smoothing.

use folio_core::{normalize_pointer, PointerTracker, SmoothedPointer, POINTER_SMOOTHING};
use glam::Vec2;

#[test]
fn in_viewport_positions_map_into_unit_square() {
    let (w, h) = (1280.0, 720.0);
    for ix in 0..=16 {
        for iy in 0..=9 {
            let cx = w * ix as f64 / 16.0;
            let cy = h * iy as f64 / 9.0;
            let p = normalize_pointer(cx, cy, w, h).unwrap();
            assert!(p.x >= -1.0 && p.x <= 1.0, "x out of range at ({cx},{cy}): {}", p.x);
            assert!(p.y >= -1.0 && p.y <= 1.0, "y out of range at ({cx},{cy}): {}", p.y);
        }
    }
}

#[test]
fn corners_and_center_have_expected_orientation() {
    let (w, h) = (800.0, 600.0);
    assert_eq!(normalize_pointer(0.0, 0.0, w, h), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(normalize_pointer(w, h, w, h), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(normalize_pointer(w / 2.0, h / 2.0, w, h), Some(Vec2::ZERO));
}

#[test]
fn positions_outside_viewport_are_not_clamped() {
    let p = normalize_pointer(-400.0, 900.0, 800.0, 600.0).unwrap();
    assert!((p.x - -2.0).abs() < 1e-6);
    assert!((p.y - -2.0).abs() < 1e-6);
}

#[test]
fn tracker_defaults_to_center_before_first_move() {
    let tracker = PointerTracker::new();
    assert_eq!(tracker.sample(), Vec2::ZERO);
}

#[test]
fn tracker_keeps_last_good_sample_when_viewport_is_empty() {
    let mut tracker = PointerTracker::new();
    tracker.record(200.0, 150.0, 400.0, 300.0);
    assert_eq!(tracker.sample(), Vec2::ZERO);
    tracker.record(400.0, 0.0, 400.0, 300.0);
    assert_eq!(tracker.sample(), Vec2::new(1.0, 1.0));
    tracker.record(10.0, 10.0, 0.0, 0.0);
    assert_eq!(tracker.sample(), Vec2::new(1.0, 1.0));
}

#[test]
fn smoothing_shrinks_distance_by_095_per_frame() {
    let target = Vec2::new(0.7, -0.4);
    let mut s = SmoothedPointer::default();
    let d0 = s.pos.distance(target);
    let mut prev = d0;
    for n in 1..=120 {
        s.step(target);
        let d = s.pos.distance(target);
        let expected = d0 * (1.0 - POINTER_SMOOTHING).powi(n);
        assert!(d < prev, "distance must shrink monotonically (frame {n})");
        assert!(
            (d - expected).abs() <= expected * 1e-3 + 1e-7,
            "frame {n}: got {d}, expected {expected}"
        );
        prev = d;
    }
}

#[test]
fn smoothing_is_per_axis() {
    let mut s = SmoothedPointer { pos: Vec2::new(1.0, 0.0) };
    s.step(Vec2::new(1.0, 1.0));
    assert_eq!(s.pos.x, 1.0);
    assert!((s.pos.y - 0.05).abs() < 1e-6);
}
