// File: crates/marquee-core/src/chart.rs
// Summary: Chart model: paired axis scales, view options, surface, overlay layer.

use crate::geometry::Rect;
use crate::options::ChartOptions;
use crate::overlay::OverlayLayer;
use crate::scale::LinearScale;
use crate::surface::ContentBox;

/// The chart-side model interactions collaborate with. Scales map data to
/// surface-local pixels; `options` carries per-axis range overrides; the
/// overlay layer holds host-rendered feedback rects.
#[derive(Clone, Debug)]
pub struct Chart {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub options: ChartOptions,
    pub surface: ContentBox,
    pub overlay: OverlayLayer,
    redraw_requests: u64,
    pending_redraw: bool,
}

impl Chart {
    /// Chart over `bounds` with the given data domains. The Y pixel range is
    /// inverted so larger data values land higher on screen.
    pub fn new(bounds: Rect, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        let x_scale = LinearScale::new(x_domain, (0.0, bounds.width));
        let y_scale = LinearScale::new(y_domain, (bounds.height, 0.0));
        Self::with_scales(bounds, x_scale, y_scale)
    }

    /// Chart from prebuilt scales; their pixel ranges are reset to `bounds`.
    pub fn with_scales(bounds: Rect, mut x_scale: LinearScale, mut y_scale: LinearScale) -> Self {
        x_scale.set_range(0.0, bounds.width);
        y_scale.set_range(bounds.height, 0.0);
        Self {
            x_scale,
            y_scale,
            options: ChartOptions::default(),
            surface: ContentBox::new(bounds),
            overlay: OverlayLayer::default(),
            redraw_requests: 0,
            pending_redraw: false,
        }
    }

    /// Ask the host to repaint. Coalesced: the host consumes at most one
    /// pending request per frame via `take_redraw_request`.
    pub fn request_redraw(&mut self) {
        self.redraw_requests += 1;
        self.pending_redraw = true;
    }

    /// Consume the pending repaint flag. Hosts call this once per frame.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_redraw)
    }

    /// Total `request_redraw` calls over the chart's lifetime.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }

    /// Move/resize the surface and refit both pixel ranges to it.
    pub fn resize(&mut self, bounds: Rect) {
        self.surface.set_bounds(bounds);
        self.x_scale.set_range(0.0, bounds.width);
        self.y_scale.set_range(bounds.height, 0.0);
    }

    /// Copy any `Some` range override into the matching scale domain.
    /// `None` overrides leave the domain as the last interaction set it.
    pub fn apply_range_overrides(&mut self) {
        if let Some((lo, hi)) = self.options.x_range {
            self.x_scale.set_domain(lo, hi);
        }
        if let Some((lo, hi)) = self.options.y_range {
            self.y_scale.set_domain(lo, hi);
        }
    }
}
