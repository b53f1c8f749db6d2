// File: crates/marquee-core/src/lib.rs
// Summary: Core library entry point; exports chart model, scales, events, interactions.

pub mod chart;
pub mod error;
pub mod event;
pub mod geometry;
pub mod options;
pub mod overlay;
pub mod plugin;
pub mod scale;
pub mod surface;
pub mod theme;

pub use chart::Chart;
pub use error::CoreError;
pub use event::{Buttons, InputEvent, Key, KeyEvent, PointerEvent, PointerId, PointerType};
pub use geometry::{Point, Rect};
pub use options::ChartOptions;
pub use overlay::{AxisSpan, OverlayHandle, OverlayLayer, OverlayRect, OverlayStyle};
pub use plugin::{Interaction, InteractionSet};
pub use scale::LinearScale;
pub use surface::ContentBox;
pub use theme::{Color, Theme};
