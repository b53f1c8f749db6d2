// File: crates/marquee-zoom/src/options.rs
// Summary: Select-zoom configuration: button mask, axis gates, drag thresholds.

use marquee_core::{Buttons, OverlayStyle};

/// Configuration for [`SelectZoom`](crate::SelectZoom).
///
/// Start from [`Default`] and override the fields you care about, e.g. with
/// struct update syntax: `SelectZoomOptions { threshold_x: 30.0, ..Default::default() }`.
#[derive(Clone, Copy, Debug)]
pub struct SelectZoomOptions {
    /// Mouse buttons allowed to start a drag. Touch and pen pointers ignore
    /// the mask.
    pub mouse_buttons: Buttons,
    /// Allow zooming the X axis.
    pub enable_x: bool,
    /// Allow zooming the Y axis.
    pub enable_y: bool,
    /// Minimum drag width in px before the X axis arms. Clamped by the drag
    /// height, so a tall drag arms X at any width.
    pub threshold_x: f32,
    /// Minimum drag height in px before the Y axis arms. Clamped by the drag
    /// width.
    pub threshold_y: f32,
    /// Cancel the active gesture when another pointer goes down. The second
    /// pointer never starts a gesture of its own either way.
    pub cancel_on_second_pointer: bool,
    /// Styling for the host-drawn selection box.
    pub style: OverlayStyle,
}

impl Default for SelectZoomOptions {
    fn default() -> Self {
        Self {
            mouse_buttons: Buttons::PRIMARY,
            enable_x: true,
            enable_y: true,
            threshold_x: 0.0,
            threshold_y: 0.0,
            cancel_on_second_pointer: false,
            style: OverlayStyle::default(),
        }
    }
}

impl SelectZoomOptions {
    pub fn with_buttons(mut self, mask: Buttons) -> Self {
        self.mouse_buttons = mask;
        self
    }

    pub fn with_axes(mut self, x: bool, y: bool) -> Self {
        self.enable_x = x;
        self.enable_y = y;
        self
    }

    pub fn with_thresholds(mut self, x: f32, y: f32) -> Self {
        self.threshold_x = x;
        self.threshold_y = y;
        self
    }

    pub fn with_cancel_on_second_pointer(mut self, cancel: bool) -> Self {
        self.cancel_on_second_pointer = cancel;
        self
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }
}
