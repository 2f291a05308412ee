//! Grid-bucketed spatial index for bbox region queries.
//!
//! Mirrors pdfminer's `Plane`: the page is divided into `GRID_SIZE`-unit
//! cells; an item is filed under every cell its bbox touches, so a region
//! query only has to look at the handful of buckets the query box touches
//! instead of scanning every item on the page.

use fxhash::FxHashMap;

use crate::geom::Rect;

const GRID_SIZE: f64 = 50.0;

type Cell = (i64, i64);

/// Spatial index over items of type `T`, keyed by a caller-supplied bbox.
pub struct Plane<T> {
    bbox: Rect,
    grid: FxHashMap<Cell, Vec<usize>>,
    items: Vec<(Rect, T)>,
}

impl<T> Plane<T> {
    /// `bbox` should cover the full extent of items that will be inserted;
    /// it is only used to clamp the grid range, so an oversized box is safe.
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            grid: FxHashMap::default(),
            items: Vec::new(),
        }
    }

    fn range(&self, lo: f64, hi: f64, axis_lo: f64, axis_hi: f64) -> std::ops::RangeInclusive<i64> {
        let lo = lo.max(axis_lo);
        let hi = hi.min(axis_hi);
        let a = ((lo - axis_lo) / GRID_SIZE).floor() as i64;
        let b = ((hi - axis_lo) / GRID_SIZE).floor() as i64;
        a..=b.max(a)
    }

    /// File `item` (identified by `bbox`) into every grid cell it touches.
    pub fn insert(&mut self, bbox: Rect, item: T) {
        let idx = self.items.len();
        for gx in self.range(bbox.x0(), bbox.x1(), self.bbox.x0(), self.bbox.x1()) {
            for gy in self.range(bbox.y0(), bbox.y1(), self.bbox.y0(), self.bbox.y1()) {
                self.grid.entry((gx, gy)).or_default().push(idx);
            }
        }
        self.items.push((bbox, item));
    }

    /// All items whose bbox intersects `region`, deduplicated.
    pub fn find(&self, region: Rect) -> Vec<&T>
    where
        T: Clone,
    {
        let mut seen = fxhash::FxHashSet::default();
        let mut out = Vec::new();
        for gx in self.range(region.x0(), region.x1(), self.bbox.x0(), self.bbox.x1()) {
            for gy in self.range(region.y0(), region.y1(), self.bbox.y0(), self.bbox.y1()) {
                if let Some(idxs) = self.grid.get(&(gx, gy)) {
                    for &idx in idxs {
                        if seen.insert(idx) {
                            let (bbox, item) = &self.items[idx];
                            if bbox.is_hoverlap(&region) && bbox.is_voverlap(&region) {
                                out.push(item);
                            }
                        }
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_overlapping_items_only() {
        let page = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut plane = Plane::new(page);
        plane.insert(Rect::new(0.0, 0.0, 10.0, 10.0), "a");
        plane.insert(Rect::new(500.0, 500.0, 510.0, 510.0), "b");

        let hits = plane.find(Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(hits, vec![&"a"]);
    }

    #[test]
    fn spans_multiple_cells() {
        let page = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut plane = Plane::new(page);
        // Large item spanning several grid cells should still only be
        // reported once.
        plane.insert(Rect::new(0.0, 0.0, 200.0, 200.0), "big");
        let hits = plane.find(Rect::new(190.0, 190.0, 195.0, 195.0));
        assert_eq!(hits, vec![&"big"]);
    }
}
