// File: crates/marquee-zoom/src/select.rs
// Summary: Rubber-band gesture state machine: anchor, grow, zoom on release.

use marquee_core::{
    AxisSpan, Chart, InputEvent, Interaction, Key, OverlayHandle, Point, PointerEvent, PointerId,
    PointerType,
};

use crate::options::SelectZoomOptions;

/// State held while one pointer is dragging out a selection.
#[derive(Clone, Copy, Debug)]
struct ActiveGesture {
    anchor: Point,
    pointer_id: PointerId,
}

/// Drag-select zoom. Pointer-down anchors a selection box, moves grow it and
/// arm the axes, release zooms the armed scales into the selected span. The
/// box is published through the chart's overlay layer for the host to draw.
pub struct SelectZoom {
    options: SelectZoomOptions,
    visual: OverlayHandle,
    gesture: Option<ActiveGesture>,
    select_x: bool,
    select_y: bool,
}

impl SelectZoom {
    /// Attach to a chart; claims one overlay rect for the selection box.
    pub fn new(chart: &mut Chart, options: SelectZoomOptions) -> Self {
        let visual = chart.overlay.add_rect(options.style);
        Self { options, visual, gesture: None, select_x: false, select_y: false }
    }

    pub fn options(&self) -> &SelectZoomOptions {
        &self.options
    }

    /// Whether a drag is in flight.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    fn on_pointer_down(&mut self, ev: &PointerEvent, chart: &mut Chart) {
        if self.gesture.is_some() {
            // A second pointer never starts a nested gesture; at most it
            // cancels the one in flight.
            if self.options.cancel_on_second_pointer {
                self.reset(chart);
            }
            return;
        }
        if ev.pointer_type == PointerType::Mouse
            && !ev.buttons.intersects(self.options.mouse_buttons)
        {
            return;
        }

        let anchor = chart.surface.to_local(ev.position);
        self.gesture = Some(ActiveGesture { anchor, pointer_id: ev.pointer_id });
        self.select_x = false;
        self.select_y = false;
        chart.surface.set_pointer_capture(ev.pointer_id);

        if let Some(rect) = chart.overlay.rect_mut(self.visual) {
            rect.x = AxisSpan::Px { start: anchor.x, len: 0.0 };
            rect.y = AxisSpan::Px { start: anchor.y, len: 0.0 };
            rect.visible = true;
        }
        log::trace!("selection anchored at ({:.1}, {:.1})", anchor.x, anchor.y);
    }

    fn on_pointer_move(&mut self, ev: &PointerEvent, chart: &mut Chart) {
        let Some(gesture) = self.gesture else { return };
        if ev.pointer_id != gesture.pointer_id {
            return;
        }
        let p = chart.surface.to_local(ev.position);

        let x = gesture.anchor.x.min(p.x);
        let y = gesture.anchor.y.min(p.y);
        let width = (gesture.anchor.x - p.x).abs();
        let height = (gesture.anchor.y - p.y).abs();

        // Effective thresholds never exceed the cross-axis extent, and a
        // disabled cross axis arms this one unconditionally.
        let min_width = height.min(self.options.threshold_x);
        let min_height = width.min(self.options.threshold_y);
        self.select_x = width >= min_width || !self.options.enable_y;
        self.select_y = height > min_height || !self.options.enable_x;

        if let Some(rect) = chart.overlay.rect_mut(self.visual) {
            if self.options.enable_x && self.select_x {
                rect.x = AxisSpan::Px { start: x, len: width };
            } else {
                rect.x = AxisSpan::Full;
            }
            if self.options.enable_y && self.select_y {
                rect.y = AxisSpan::Px { start: y, len: height };
            } else {
                rect.y = AxisSpan::Full;
            }
        }
    }

    fn on_pointer_up(&mut self, ev: &PointerEvent, chart: &mut Chart) {
        let Some(gesture) = self.gesture else { return };
        if ev.pointer_id != gesture.pointer_id {
            return;
        }
        let p = chart.surface.to_local(ev.position);

        let x1 = gesture.anchor.x.min(p.x);
        let x2 = gesture.anchor.x.max(p.x);
        // Y edges swap: the bottom pixel edge carries the low end of the
        // value axis.
        let y1 = gesture.anchor.y.max(p.y);
        let y2 = gesture.anchor.y.min(p.y);

        let mut changed = false;
        if self.options.enable_x && self.select_x && x2 != x1 {
            let lo = chart.x_scale.from_px(x1);
            let hi = chart.x_scale.from_px(x2);
            chart.x_scale.set_domain(lo, hi);
            chart.options.x_range = None;
            changed = true;
        }
        if self.options.enable_y && self.select_y && y2 != y1 {
            let lo = chart.y_scale.from_px(y1);
            let hi = chart.y_scale.from_px(y2);
            chart.y_scale.set_domain(lo, hi);
            chart.options.y_range = None;
            changed = true;
        }
        if changed {
            log::debug!(
                "selection applied: x={:?} y={:?}",
                chart.x_scale.domain(),
                chart.y_scale.domain()
            );
            chart.request_redraw();
        }

        self.reset(chart);
    }

    fn on_pointer_cancel(&mut self, ev: &PointerEvent, chart: &mut Chart) {
        if self.gesture.is_some_and(|g| g.pointer_id == ev.pointer_id) {
            self.reset(chart);
        }
    }

    fn on_key_down(&mut self, key: Key, chart: &mut Chart) {
        if key == Key::Escape {
            self.reset(chart);
        }
    }

    /// Terminate any gesture in flight: drop the capture grant, hide the box,
    /// clear state. A no-op while idle.
    fn reset(&mut self, chart: &mut Chart) {
        let Some(gesture) = self.gesture.take() else { return };
        chart.surface.release_pointer_capture(gesture.pointer_id);
        if let Some(rect) = chart.overlay.rect_mut(self.visual) {
            rect.visible = false;
        }
        log::trace!("selection reset");
    }
}

impl Interaction for SelectZoom {
    fn id(&self) -> &'static str {
        "select_zoom"
    }

    fn on_input(&mut self, event: &InputEvent, chart: &mut Chart) {
        match event {
            InputEvent::PointerDown(ev) => self.on_pointer_down(ev, chart),
            InputEvent::PointerMove(ev) => self.on_pointer_move(ev, chart),
            InputEvent::PointerUp(ev) => self.on_pointer_up(ev, chart),
            InputEvent::PointerCancel(ev) => self.on_pointer_cancel(ev, chart),
            InputEvent::KeyDown(ev) => self.on_key_down(ev.key, chart),
        }
    }
}
