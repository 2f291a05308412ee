//! Neighbor-based transitive closure of lines into text boxes (spec §4.5).

use fxhash::FxHashSet;

use crate::geom::Rect;
use crate::item::{Bounded, Orientation, TextBox, TextLine};
use crate::plane::Plane;

/// Widens `line`'s bbox by `ratio` of its shorter/perpendicular side, per
/// orientation, to build the neighbor-search region (spec §4.5 step 2).
fn neighbor_region(line: &TextLine, ratio: f64) -> Rect {
    let b = line.bbox();
    match line.orientation() {
        Orientation::Horizontal => {
            let h = ratio * b.height();
            Rect::new(b.x0(), b.y0() - h, b.x1(), b.y1() + h)
        }
        Orientation::Vertical => {
            let w = ratio * b.width();
            Rect::new(b.x0() - w, b.y0(), b.x1() + w, b.y1())
        }
    }
}

/// Groups `lines` (any order) into finalized text boxes via the transitive
/// closure of the widened-neighbor relation, restricted to same-orientation
/// lines (spec §4.5).
///
/// Mirrors `get_textboxes` in `original_source/pdfminer/layout.py`: the
/// `boxes: dict[line -> box]` there is realized here as a `box_of: Vec<Option<usize>>`
/// index into a growing `box_members` table, since absorbing a neighbor's
/// whole prior box (by iterating it, in the original) is just "extend with
/// that box's member-index list" once membership is tracked by index
/// rather than by owned `TextLine`.
pub fn aggregate_boxes(lines: Vec<TextLine>, line_margin: f64) -> Vec<TextBox> {
    if lines.is_empty() {
        return Vec::new();
    }

    let page_bbox = lines.iter().fold(Rect::empty(), |acc, l| acc.union(&l.bbox()));
    let mut plane: Plane<usize> = Plane::new(page_bbox);
    for (i, line) in lines.iter().enumerate() {
        plane.insert(line.bbox(), i);
    }

    // `box_members[b]` is the (orientation, deduplicated member indices) of
    // box id `b` at the time it was created. `box_of[i]` always points at
    // the most recent box id line `i` was placed in; stale earlier entries
    // in `box_members` are simply never referenced again.
    let mut box_members: Vec<(Orientation, Vec<usize>)> = Vec::new();
    let mut box_of: Vec<Option<usize>> = vec![None; lines.len()];

    for (i, line) in lines.iter().enumerate() {
        let region = neighbor_region(line, line_margin);
        let neighbor_idxs: Vec<usize> = plane
            .find(region)
            .into_iter()
            .copied()
            .filter(|&j| lines[j].orientation() == line.orientation())
            .collect();
        debug_assert!(neighbor_idxs.contains(&i), "a line must find itself among its own neighbors");

        let mut members = Vec::new();
        for j in neighbor_idxs {
            members.push(j);
            if let Some(old_box) = box_of[j] {
                members.extend(box_members[old_box].1.iter().copied());
            }
        }

        let mut seen = FxHashSet::default();
        let mut deduped = Vec::new();
        for m in members {
            if seen.insert(m) {
                deduped.push(m);
            }
        }

        let new_box_id = box_members.len();
        for &m in &deduped {
            box_of[m] = Some(new_box_id);
        }
        box_members.push((line.orientation(), deduped));
    }

    // Walk lines once more in original order, consuming each line into its
    // final box and emitting each distinct box exactly once (spec §4.5
    // step 4).
    let mut lines: Vec<Option<TextLine>> = lines.into_iter().map(Some).collect();
    let mut emitted: FxHashSet<usize> = FxHashSet::default();
    let mut out = Vec::new();

    for i in 0..lines.len() {
        let box_id = box_of[i].expect("every line is assigned a box in the pass above");
        if emitted.insert(box_id) {
            let (orientation, members) = &box_members[box_id];
            let mut b = TextBox::new(*orientation);
            for &m in members {
                if let Some(line) = lines[m].take() {
                    b.add(line);
                }
            }
            b.finish();
            out.push(b);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Glyph;

    fn hline(y0: f64, y1: f64) -> TextLine {
        let mut line = TextLine::new(Orientation::Horizontal);
        line.add(Glyph::new(Rect::new(0.0, y0, 10.0, y1), "x", Orientation::Horizontal, 10.0, y1 - y0, true), 0.1);
        line.finish();
        line
    }

    fn vline(x0: f64, x1: f64) -> TextLine {
        let mut line = TextLine::new(Orientation::Vertical);
        line.add(Glyph::new(Rect::new(x0, 0.0, x1, 10.0), "x", Orientation::Vertical, x1 - x0, x1 - x0, true), 0.1);
        line.finish();
        line
    }

    #[test]
    fn close_lines_merge_into_one_box() {
        let lines = vec![hline(80.0, 92.0), hline(65.0, 77.0)];
        let boxes = aggregate_boxes(lines, 0.5);
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].lines().len(), 2);
    }

    #[test]
    fn far_lines_stay_separate() {
        let lines = vec![hline(80.0, 92.0), hline(15.0, 27.0)];
        let boxes = aggregate_boxes(lines, 0.5);
        assert_eq!(boxes.len(), 2);
    }

    #[test]
    fn mixed_orientation_does_not_merge() {
        let lines = vec![hline(50.0, 62.0), vline(120.0, 132.0)];
        let boxes = aggregate_boxes(lines, 0.5);
        assert_eq!(boxes.len(), 2);
    }

    #[test]
    fn transitive_chain_merges_into_one_box() {
        // Lines 1-2 are close and 2-3 are close; 1-3 alone would not
        // merge, but the union-find-style closure still merges all three.
        let lines = vec![hline(80.0, 92.0), hline(65.0, 77.0), hline(50.0, 62.0)];
        let boxes = aggregate_boxes(lines, 0.5);
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].lines().len(), 3);
    }
}
