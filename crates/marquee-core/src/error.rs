// File: crates/marquee-core/src/error.rs
// Summary: Typed errors for model construction.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("axis domain endpoints must be finite, got [{lo}, {hi}]")]
    NonFiniteDomain { lo: f64, hi: f64 },

    #[error("pixel range {start}..{end} has no extent")]
    EmptyRange { start: f32, end: f32 },
}
