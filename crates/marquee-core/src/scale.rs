// File: crates/marquee-core/src/scale.rs
// Summary: Linear domain<->pixel scale with zoom-driven domain updates.

use crate::error::CoreError;

/// Linear mapping between a value domain and a pixel range.
///
/// The range may run backwards: a vertical scale built over
/// `(bottom_px, top_px)` puts the domain low end at the bottom of the plot,
/// which is how screen Y (growing downward) carries a value axis growing
/// upward.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    /// Build a scale, nudging degenerate spans apart instead of failing.
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut s = Self { domain, range };
        if (s.domain.1 - s.domain.0).abs() < 1e-12 {
            s.domain.1 = s.domain.0 + 1.0;
        }
        if (s.range.1 - s.range.0).abs() < 1e-6 {
            s.range.1 = s.range.0 + 1.0;
        }
        s
    }

    /// Strict constructor for externally sourced bounds: rejects non-finite
    /// domain endpoints and ranges with no extent.
    pub fn try_new(domain: (f64, f64), range: (f32, f32)) -> Result<Self, CoreError> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(CoreError::NonFiniteDomain { lo: domain.0, hi: domain.1 });
        }
        if (range.1 - range.0).abs() < 1e-6 {
            return Err(CoreError::EmptyRange { start: range.0, end: range.1 });
        }
        Ok(Self { domain, range })
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f32, f32) { self.range }

    /// Replace the value domain, e.g. after a zoom.
    pub fn set_domain(&mut self, lo: f64, hi: f64) {
        self.domain = (lo, hi);
    }

    /// Replace the pixel range, e.g. after a surface resize.
    pub fn set_range(&mut self, start: f32, end: f32) {
        self.range = (start, end);
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.domain.1 - self.domain.0;
        let span = if span.abs() < 1e-12 { 1e-12f64.copysign(span) } else { span };
        self.range.0 + (((v - self.domain.0) / span) as f32) * (self.range.1 - self.range.0)
    }

    /// Map a pixel coordinate back into the domain.
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let rspan = self.range.1 - self.range.0;
        let rspan = if rspan.abs() < 1e-6 { 1e-6f32.copysign(rspan) } else { rspan };
        self.domain.0 + ((px - self.range.0) / rspan) as f64 * (self.domain.1 - self.domain.0)
    }
}
