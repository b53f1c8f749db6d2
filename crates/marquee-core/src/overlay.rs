// File: crates/marquee-core/src/overlay.rs
// Summary: Overlay layer: host-rendered feedback rectangles with per-axis spans.

use crate::geometry::Rect;
use crate::theme::Color;

/// Geometry of one overlay axis: either a concrete pixel span or the full
/// extent of the surface on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisSpan {
    Px { start: f32, len: f32 },
    Full,
}

/// Stroke/fill styling hooks for an overlay rect. `opacity` applies to the
/// rect as a whole, on top of the per-color alpha.
#[derive(Clone, Copy, Debug)]
pub struct OverlayStyle {
    pub stroke: Color,
    pub fill: Color,
    pub stroke_width: f32,
    pub opacity: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke: Color::from_argb(255, 255, 255, 255),
            fill: Color::from_argb(255, 128, 128, 128),
            stroke_width: 1.0,
            opacity: 0.5,
        }
    }
}

/// One feedback rectangle; hidden until an interaction shows it.
#[derive(Clone, Copy, Debug)]
pub struct OverlayRect {
    pub x: AxisSpan,
    pub y: AxisSpan,
    pub visible: bool,
    pub style: OverlayStyle,
}

impl OverlayRect {
    fn hidden(style: OverlayStyle) -> Self {
        Self {
            x: AxisSpan::Px { start: 0.0, len: 0.0 },
            y: AxisSpan::Px { start: 0.0, len: 0.0 },
            visible: false,
            style,
        }
    }

    /// Concrete surface-local geometry over a surface of the given size;
    /// `None` while hidden.
    pub fn resolve(&self, surface_width: f32, surface_height: f32) -> Option<Rect> {
        if !self.visible {
            return None;
        }
        let (x, w) = match self.x {
            AxisSpan::Px { start, len } => (start, len),
            AxisSpan::Full => (0.0, surface_width),
        };
        let (y, h) = match self.y {
            AxisSpan::Px { start, len } => (start, len),
            AxisSpan::Full => (0.0, surface_height),
        };
        Some(Rect::from_ltwh(x, y, w, h))
    }
}

/// Index of a rect within its layer; stable for the layer's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayHandle(usize);

/// All overlay rects attached to one chart. Rects are appended once by the
/// component that owns them and are never removed.
#[derive(Clone, Debug, Default)]
pub struct OverlayLayer {
    rects: Vec<OverlayRect>,
}

impl OverlayLayer {
    pub fn add_rect(&mut self, style: OverlayStyle) -> OverlayHandle {
        self.rects.push(OverlayRect::hidden(style));
        OverlayHandle(self.rects.len() - 1)
    }

    pub fn rect(&self, handle: OverlayHandle) -> Option<&OverlayRect> {
        self.rects.get(handle.0)
    }

    pub fn rect_mut(&mut self, handle: OverlayHandle) -> Option<&mut OverlayRect> {
        self.rects.get_mut(handle.0)
    }

    /// Rects in insertion order; renderers skip the ones `resolve` hides.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayRect> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize { self.rects.len() }
    pub fn is_empty(&self) -> bool { self.rects.is_empty() }
}
