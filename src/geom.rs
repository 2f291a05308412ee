//! Bounding-box arithmetic shared by every stage of the pipeline.
//!
//! All coordinates are PDF user-space: `x` increases rightward, `y`
//! increases upward (so "below" means a smaller `y`).

use euclid::Box2D;

use crate::error::LayoutError;

/// Tag type for [`euclid`] so page-space boxes can't be mixed up with an
/// unrelated 2-D unit elsewhere in a consumer's code.
pub struct PageSpace;

/// An axis-aligned bounding box in page space.
///
/// Newtype over [`euclid::Box2D`] rather than a bare 4-tuple: it gives every
/// call site `.x0()`/`.y0()`/`.x1()`/`.y1()` accessors instead of positional
/// fields, and keeps `width`/`height`/`union` available for free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect(Box2D<f64, PageSpace>);

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1, "malformed bbox ({x0}, {y0}, {x1}, {y1})");
        Self(Box2D::new((x0, y0).into(), (x1, y1).into()))
    }

    /// Fallible constructor for bboxes sourced from an external caller
    /// (spec.md §7 "Malformed bbox"). `new` debug-asserts the same
    /// condition for internally-computed boxes, which are never malformed.
    pub fn try_new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, LayoutError> {
        LayoutError::check(x0, y0, x1, y1)?;
        Ok(Self(Box2D::new((x0, y0).into(), (x1, y1).into())))
    }

    /// The empty/uninitialized box used as the seed for an expandable
    /// container, matching the original's `(+INF, +INF, -INF, -INF)`. This
    /// sentinel is deliberately inverted (`x0 > x1`, `y0 > y1`) so the first
    /// `union` with a real box produces that box unchanged; it must bypass
    /// `new`'s well-formedness assert rather than trip it.
    pub fn empty() -> Self {
        Self(Box2D::new(
            (f64::INFINITY, f64::INFINITY).into(),
            (f64::NEG_INFINITY, f64::NEG_INFINITY).into(),
        ))
    }

    pub fn x0(&self) -> f64 {
        self.0.min.x
    }

    pub fn y0(&self) -> f64 {
        self.0.min.y
    }

    pub fn x1(&self) -> f64 {
        self.0.max.x
    }

    pub fn y1(&self) -> f64 {
        self.0.max.y
    }

    pub fn width(&self) -> f64 {
        (self.x1() - self.x0()).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.y1() - self.y0()).max(0.0)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.x1() <= self.x0() || self.y1() <= self.y0()
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.x0().min(other.x0()),
            self.y0().min(other.y0()),
            self.x1().max(other.x1()),
            self.y1().max(other.y1()),
        )
    }

    /// Horizontal overlap: do the x-ranges intersect?
    pub fn is_hoverlap(&self, other: &Rect) -> bool {
        self.x0() <= other.x1() && other.x0() <= self.x1()
    }

    /// Vertical overlap: do the y-ranges intersect?
    pub fn is_voverlap(&self, other: &Rect) -> bool {
        self.y0() <= other.y1() && other.y0() <= self.y1()
    }

    /// Horizontal gap between the two boxes; zero when they overlap.
    pub fn hdistance(&self, other: &Rect) -> f64 {
        if self.is_hoverlap(other) {
            0.0
        } else {
            (self.x0() - other.x1()).abs().min((self.x1() - other.x0()).abs())
        }
    }

    /// Length of horizontal overlap between the two boxes (negative if
    /// disjoint, magnitude is the gap).
    pub fn hoverlap(&self, other: &Rect) -> f64 {
        if self.is_hoverlap(other) {
            self.x1().min(other.x1()) - self.x0().max(other.x0())
        } else {
            -self.hdistance(other)
        }
    }

    /// Vertical gap between the two boxes; negative when they overlap.
    pub fn vdistance(&self, other: &Rect) -> f64 {
        if self.is_voverlap(other) {
            0.0
        } else {
            (other.y0() - self.y1()).abs().min((self.y0() - other.y1()).abs())
        }
    }

    /// Length of vertical overlap between the two boxes (negative if
    /// disjoint, magnitude is the gap).
    pub fn voverlap(&self, other: &Rect) -> f64 {
        if self.is_voverlap(other) {
            self.y1().min(other.y1()) - self.y0().max(other.y0())
        } else {
            -self.vdistance(other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 20.0, 8.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn hoverlap_positive_when_ranges_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 0.0, 15.0, 10.0);
        assert!(a.is_hoverlap(&b));
        assert_eq!(a.hoverlap(&b), 5.0);
    }

    #[test]
    fn hdistance_zero_when_overlapping() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 0.0, 15.0, 10.0);
        assert_eq!(a.hdistance(&b), 0.0);
    }

    #[test]
    fn hdistance_positive_gap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 30.0, 10.0);
        assert_eq!(a.hdistance(&b), 10.0);
    }

    #[test]
    fn empty_rect_reports_empty() {
        assert!(Rect::empty().is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
