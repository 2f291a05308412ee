//! Ingress validation errors.
//!
//! The analyzer itself is a total function (spec.md §7): the one fallible
//! boundary is a caller supplying a malformed bbox before anything is built.

use thiserror::Error;

/// Failure constructing a [`crate::geom::Rect`] or an item built from one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid bbox: x1 ({x1}) < x0 ({x0})")]
    InvalidX { x0: f64, x1: f64 },
    #[error("invalid bbox: y1 ({y1}) < y0 ({y0})")]
    InvalidY { y0: f64, y1: f64 },
}

impl LayoutError {
    /// Checks `x0 <= x1` and `y0 <= y1`, the well-formedness condition
    /// spec.md §3 requires of every bbox.
    pub fn check(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(), LayoutError> {
        if x1 < x0 {
            return Err(LayoutError::InvalidX { x0, x1 });
        }
        if y1 < y0 {
            return Err(LayoutError::InvalidY { y0, y1 });
        }
        Ok(())
    }
}
