// File: crates/marquee-zoom/src/lib.rs
// Summary: Drag-select zoom interaction: rubber-band a box, zoom the scales into it.

pub mod options;
pub mod select;

pub use options::SelectZoomOptions;
pub use select::SelectZoom;
