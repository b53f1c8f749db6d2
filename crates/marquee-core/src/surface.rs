// File: crates/marquee-core/src/surface.rs
// Summary: The capturable interactive surface: bounds plus pointer-capture bookkeeping.

use crate::event::PointerId;
use crate::geometry::{Point, Rect};

/// The rectangular element input events are delivered against.
///
/// Holds the viewport bounding rect used to convert event positions into
/// local coordinates, and tracks per-pointer capture grants. Capture is
/// bookkeeping for the host: while a pointer is captured, the host keeps
/// routing its events to this chart even after it leaves the bounds.
#[derive(Clone, Debug, Default)]
pub struct ContentBox {
    bounds: Rect,
    captured: Vec<PointerId>,
}

impl ContentBox {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, captured: Vec::new() }
    }

    pub fn bounds(&self) -> Rect { self.bounds }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Convert a viewport position to surface-local coordinates.
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.bounds.left, p.y - self.bounds.top)
    }

    /// Grant capture for `id`. Granting an already captured pointer again is
    /// a no-op; returns whether a new grant was recorded.
    pub fn set_pointer_capture(&mut self, id: PointerId) -> bool {
        if self.captured.contains(&id) {
            return false;
        }
        self.captured.push(id);
        true
    }

    /// Drop the grant for `id`. Tolerates pointers that were never captured;
    /// returns whether a grant was actually dropped.
    pub fn release_pointer_capture(&mut self, id: PointerId) -> bool {
        let before = self.captured.len();
        self.captured.retain(|c| *c != id);
        self.captured.len() != before
    }

    pub fn captured(&self, id: PointerId) -> bool {
        self.captured.contains(&id)
    }

    pub fn captured_any(&self) -> bool {
        !self.captured.is_empty()
    }
}
