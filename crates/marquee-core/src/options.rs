// File: crates/marquee-core/src/options.rs
// Summary: Chart-level view options: optional per-axis range overrides.

/// View options owned by the chart. A `Some` range pins the axis domain to
/// that interval on the next `apply_range_overrides`; `None` leaves the scale
/// domain in charge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartOptions {
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
}
