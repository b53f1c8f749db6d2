// File: crates/marquee-zoom/tests/policies.rs
// Purpose: Validate option-driven gesture policies: button masks, pointer types,
// thresholds, second-pointer handling.

use marquee_core::{
    AxisSpan, Buttons, Chart, InputEvent, Interaction, Point, PointerEvent, PointerId,
    PointerType, Rect,
};
use marquee_zoom::{SelectZoom, SelectZoomOptions};

fn chart() -> Chart {
    Chart::new(Rect::from_ltwh(0.0, 0.0, 100.0, 100.0), (0.0, 100.0), (0.0, 100.0))
}

fn pev(id: u64, kind: PointerType, buttons: Buttons, x: f32, y: f32) -> PointerEvent {
    PointerEvent {
        pointer_id: PointerId(id),
        pointer_type: kind,
        buttons,
        position: Point::new(x, y),
    }
}

fn mouse_down(id: u64, buttons: Buttons, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown(pev(id, PointerType::Mouse, buttons, x, y))
}

fn mouse_mv(id: u64, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove(pev(id, PointerType::Mouse, Buttons::PRIMARY, x, y))
}

fn mouse_up(id: u64, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp(pev(id, PointerType::Mouse, Buttons::NONE, x, y))
}

fn drag(zoom: &mut SelectZoom, chart: &mut Chart, from: (f32, f32), to: (f32, f32)) {
    zoom.on_input(&mouse_down(1, Buttons::PRIMARY, from.0, from.1), chart);
    zoom.on_input(&mouse_mv(1, to.0, to.1), chart);
    zoom.on_input(&mouse_up(1, to.0, to.1), chart);
}

#[test]
fn button_mask_gates_mouse_pointers() {
    let mut chart = chart();
    let opts = SelectZoomOptions::default().with_buttons(Buttons::SECONDARY);
    let mut zoom = SelectZoom::new(&mut chart, opts);

    zoom.on_input(&mouse_down(1, Buttons::PRIMARY, 10.0, 10.0), &mut chart);
    assert!(!zoom.is_active(), "wrong button must not start a drag");
    assert!(!chart.surface.captured(PointerId(1)));
    assert!(!chart.overlay.iter().next().expect("selection rect").visible);

    zoom.on_input(&mouse_down(1, Buttons::SECONDARY, 10.0, 10.0), &mut chart);
    assert!(zoom.is_active());

    // Chorded press counts as long as the mask bit is in there.
    let mut chart2 = self::chart();
    let mut zoom2 = SelectZoom::new(&mut chart2, opts);
    let chord = Buttons::PRIMARY.union(Buttons::SECONDARY);
    zoom2.on_input(&mouse_down(1, chord, 10.0, 10.0), &mut chart2);
    assert!(zoom2.is_active());
}

#[test]
fn touch_and_pen_bypass_the_mask() {
    let mut chart = chart();
    let mut zoom = SelectZoom::new(&mut chart, SelectZoomOptions::default());

    // A touch contact reports no buttons at all.
    let touch = pev(5, PointerType::Touch, Buttons::NONE, 20.0, 20.0);
    zoom.on_input(&InputEvent::PointerDown(touch), &mut chart);
    assert!(zoom.is_active(), "touch starts a drag regardless of the mask");
    zoom.on_input(&InputEvent::PointerUp(pev(5, PointerType::Touch, Buttons::NONE, 60.0, 60.0)), &mut chart);

    let mut chart2 = self::chart();
    let mut zoom2 = SelectZoom::new(&mut chart2, SelectZoomOptions::default());
    let pen = pev(9, PointerType::Pen, Buttons::NONE, 20.0, 20.0);
    zoom2.on_input(&InputEvent::PointerDown(pen), &mut chart2);
    assert!(zoom2.is_active());
}

#[test]
fn second_pointer_is_dropped_while_a_gesture_runs() {
    let mut chart = chart();
    let mut zoom = SelectZoom::new(&mut chart, SelectZoomOptions::default());

    zoom.on_input(&mouse_down(1, Buttons::PRIMARY, 20.0, 20.0), &mut chart);
    zoom.on_input(&mouse_down(2, Buttons::PRIMARY, 70.0, 70.0), &mut chart);

    assert!(zoom.is_active());
    assert!(!chart.surface.captured(PointerId(2)), "intruder gets no capture grant");

    // The intruder's stream is invisible to the gesture.
    zoom.on_input(&mouse_mv(2, 90.0, 90.0), &mut chart);
    zoom.on_input(&mouse_up(2, 90.0, 90.0), &mut chart);
    assert!(zoom.is_active());
    assert_eq!(chart.redraw_requests(), 0);

    // The first pointer still finishes its zoom.
    zoom.on_input(&mouse_mv(1, 60.0, 60.0), &mut chart);
    zoom.on_input(&mouse_up(1, 60.0, 60.0), &mut chart);
    let (xlo, xhi) = chart.x_scale.domain();
    assert!((xlo - 20.0).abs() < 1e-3 && (xhi - 60.0).abs() < 1e-3);
    assert_eq!(chart.redraw_requests(), 1);
}

#[test]
fn cancel_on_second_pointer_drops_both() {
    let mut chart = chart();
    let opts = SelectZoomOptions::default().with_cancel_on_second_pointer(true);
    let mut zoom = SelectZoom::new(&mut chart, opts);

    zoom.on_input(&mouse_down(1, Buttons::PRIMARY, 20.0, 20.0), &mut chart);
    zoom.on_input(&mouse_mv(1, 60.0, 60.0), &mut chart);
    zoom.on_input(&mouse_down(2, Buttons::PRIMARY, 70.0, 70.0), &mut chart);

    // The running gesture died and the newcomer did not take over.
    assert!(!zoom.is_active());
    assert!(!chart.surface.captured_any());
    assert!(!chart.overlay.iter().next().expect("selection rect").visible);

    zoom.on_input(&mouse_up(1, 60.0, 60.0), &mut chart);
    zoom.on_input(&mouse_up(2, 90.0, 90.0), &mut chart);
    assert_eq!(chart.x_scale.domain(), (0.0, 100.0));
    assert_eq!(chart.redraw_requests(), 0);

    // Once everything is idle the same pointer may start fresh.
    zoom.on_input(&mouse_down(2, Buttons::PRIMARY, 10.0, 10.0), &mut chart);
    assert!(zoom.is_active());
}

#[test]
fn x_threshold_clamps_to_drag_height() {
    // Narrow but near-flat drag: the 20 px threshold collapses to the 5 px
    // drag height, so 15 px of width is enough.
    let mut chart = chart();
    let opts = SelectZoomOptions::default().with_thresholds(20.0, 0.0);
    let mut zoom = SelectZoom::new(&mut chart, opts);
    drag(&mut zoom, &mut chart, (0.0, 0.0), (15.0, 5.0));
    let (xlo, xhi) = chart.x_scale.domain();
    assert!((xlo - 0.0).abs() < 1e-3 && (xhi - 15.0).abs() < 1e-3, "x armed: {xlo}..{xhi}");

    // Same width under a tall drag keeps the full threshold: X stays put.
    let mut chart2 = self::chart();
    let mut zoom2 = SelectZoom::new(&mut chart2, opts);
    drag(&mut zoom2, &mut chart2, (0.0, 0.0), (15.0, 30.0));
    assert_eq!(chart2.x_scale.domain(), (0.0, 100.0), "x below threshold");
    let (ylo, yhi) = chart2.y_scale.domain();
    assert!((ylo - 70.0).abs() < 1e-3 && (yhi - 100.0).abs() < 1e-3, "y still zooms");
}

#[test]
fn threshold_boundaries_differ_per_axis() {
    // Width exactly at the clamped threshold arms X (>= comparison).
    let mut chart = chart();
    let opts = SelectZoomOptions::default().with_thresholds(10.0, 0.0);
    let mut zoom = SelectZoom::new(&mut chart, opts);
    drag(&mut zoom, &mut chart, (0.0, 0.0), (10.0, 30.0));
    let (xlo, xhi) = chart.x_scale.domain();
    assert!((xlo - 0.0).abs() < 1e-3 && (xhi - 10.0).abs() < 1e-3, "x arms at its threshold");

    // Height exactly at the clamped threshold leaves Y idle (> comparison).
    let mut chart2 = self::chart();
    let opts2 = SelectZoomOptions::default().with_thresholds(0.0, 10.0);
    let mut zoom2 = SelectZoom::new(&mut chart2, opts2);
    drag(&mut zoom2, &mut chart2, (0.0, 0.0), (30.0, 10.0));
    assert_eq!(chart2.y_scale.domain(), (0.0, 100.0), "y needs to pass its threshold");

    let mut chart3 = self::chart();
    let mut zoom3 = SelectZoom::new(&mut chart3, opts2);
    drag(&mut zoom3, &mut chart3, (0.0, 0.0), (30.0, 10.5));
    let (ylo, yhi) = chart3.y_scale.domain();
    assert!((ylo - 89.5).abs() < 1e-3 && (yhi - 100.0).abs() < 1e-3, "y arms past it: {ylo}..{yhi}");
}

#[test]
fn disabled_cross_axis_arms_unconditionally() {
    // Y disabled: X arms no matter what the thresholds say.
    let mut chart = chart();
    let opts = SelectZoomOptions::default().with_axes(true, false).with_thresholds(50.0, 0.0);
    chart.options.y_range = Some((0.0, 100.0));
    let mut zoom = SelectZoom::new(&mut chart, opts);
    zoom.on_input(&mouse_down(1, Buttons::PRIMARY, 0.0, 0.0), &mut chart);
    zoom.on_input(&mouse_mv(1, 10.0, 40.0), &mut chart);
    {
        let rect = chart.overlay.iter().next().expect("selection rect");
        assert_eq!(rect.y, AxisSpan::Full, "disabled axis stretches the box full-height");
        assert_eq!(rect.x, AxisSpan::Px { start: 0.0, len: 10.0 });
    }
    zoom.on_input(&mouse_up(1, 10.0, 40.0), &mut chart);
    let (xlo, xhi) = chart.x_scale.domain();
    assert!((xlo - 0.0).abs() < 1e-3 && (xhi - 10.0).abs() < 1e-3, "x: {xlo}..{xhi}");
    assert_eq!(chart.y_scale.domain(), (0.0, 100.0), "disabled axis never zooms");
    assert_eq!(chart.options.y_range, Some((0.0, 100.0)));

    // Mirror image for a disabled X.
    let mut chart2 = self::chart();
    let opts2 = SelectZoomOptions::default().with_axes(false, true).with_thresholds(0.0, 50.0);
    let mut zoom2 = SelectZoom::new(&mut chart2, opts2);
    drag(&mut zoom2, &mut chart2, (0.0, 0.0), (40.0, 10.0));
    assert_eq!(chart2.x_scale.domain(), (0.0, 100.0));
    let (ylo, yhi) = chart2.y_scale.domain();
    assert!((ylo - 90.0).abs() < 1e-3 && (yhi - 100.0).abs() < 1e-3, "y: {ylo}..{yhi}");
}

#[test]
fn unarmed_axis_shows_full_span_while_dragging() {
    let mut chart = chart();
    let opts = SelectZoomOptions::default().with_thresholds(0.0, 50.0);
    let mut zoom = SelectZoom::new(&mut chart, opts);

    zoom.on_input(&mouse_down(1, Buttons::PRIMARY, 0.0, 0.0), &mut chart);
    zoom.on_input(&mouse_mv(1, 60.0, 10.0), &mut chart);

    let rect = chart.overlay.iter().next().expect("selection rect");
    assert_eq!(rect.x, AxisSpan::Px { start: 0.0, len: 60.0 });
    assert_eq!(rect.y, AxisSpan::Full, "idle axis stretches the box full-height");
    let r = rect.resolve(100.0, 100.0).expect("visible rect resolves");
    assert!((r.height - 100.0).abs() < 1e-6);
}

#[test]
fn options_merge_explicitly_over_defaults() {
    let opts = SelectZoomOptions { threshold_x: 30.0, ..Default::default() };
    assert_eq!(opts.mouse_buttons, Buttons::PRIMARY);
    assert!(opts.enable_x && opts.enable_y);
    assert!((opts.threshold_x - 30.0).abs() < 1e-6);
    assert!((opts.threshold_y - 0.0).abs() < 1e-6);
    assert!(!opts.cancel_on_second_pointer);

    let chained = SelectZoomOptions::default()
        .with_buttons(Buttons::SECONDARY)
        .with_thresholds(5.0, 5.0)
        .with_cancel_on_second_pointer(true);
    assert_eq!(chained.mouse_buttons, Buttons::SECONDARY);
    assert!(chained.cancel_on_second_pointer);
    assert!(chained.enable_x, "untouched fields keep their defaults");
}
