// File: crates/marquee-core/tests/surface.rs
// Purpose: Validate surface hit-testing, local coordinates and capture bookkeeping.

use marquee_core::{ContentBox, Point, PointerId, Rect};

#[test]
fn contains_is_inclusive_left_top_exclusive_right_bottom() {
    let r = Rect::from_ltwh(10.0, 20.0, 100.0, 50.0);
    assert!(r.contains(Point::new(10.0, 20.0)));
    assert!(r.contains(Point::new(109.9, 69.9)));
    assert!(!r.contains(Point::new(110.0, 30.0)));
    assert!(!r.contains(Point::new(50.0, 70.0)));
    assert!(!r.contains(Point::new(9.9, 30.0)));
}

#[test]
fn to_local_subtracts_the_surface_origin() {
    let surface = ContentBox::new(Rect::from_ltwh(30.0, 40.0, 200.0, 100.0));
    let p = surface.to_local(Point::new(35.0, 48.0));
    assert!((p.x - 5.0).abs() < 1e-6);
    assert!((p.y - 8.0).abs() < 1e-6);
}

#[test]
fn capture_grant_is_idempotent() {
    let mut surface = ContentBox::new(Rect::from_ltwh(0.0, 0.0, 100.0, 100.0));
    let id = PointerId(7);
    assert!(surface.set_pointer_capture(id));
    assert!(!surface.set_pointer_capture(id), "second grant is a no-op");
    assert!(surface.captured(id));
    assert!(surface.captured_any());
}

#[test]
fn release_tolerates_uncaptured_pointers() {
    let mut surface = ContentBox::new(Rect::from_ltwh(0.0, 0.0, 100.0, 100.0));
    let id = PointerId(1);
    surface.set_pointer_capture(id);
    assert!(surface.release_pointer_capture(id));
    // No grant left, releasing again must not fail.
    assert!(!surface.release_pointer_capture(id));
    assert!(!surface.release_pointer_capture(PointerId(99)));
    assert!(!surface.captured_any());
}

#[test]
fn capture_tracks_pointers_independently() {
    let mut surface = ContentBox::new(Rect::from_ltwh(0.0, 0.0, 100.0, 100.0));
    surface.set_pointer_capture(PointerId(1));
    surface.set_pointer_capture(PointerId(2));
    assert!(surface.release_pointer_capture(PointerId(1)));
    assert!(surface.captured(PointerId(2)), "other grants survive a release");
}
