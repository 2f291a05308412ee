//! Agglomerative clustering of boxes into a binary reading-order tree
//! (spec §4.6).

use crate::item::{Arrangement, Bounded, TextBox, TextGroup, TreeNode};

/// Signed "wasted area" distance between two items: the area of their
/// tightest enclosing union minus the sum of their own areas. May be
/// negative when the items overlap (spec §4.6).
fn distance(a: &impl Bounded, b: &impl Bounded) -> f64 {
    let (abb, bbb) = (a.bbox(), b.bbox());
    abb.union(&bbb).area() - abb.area() - bbb.area()
}

/// Builds the single root [`TreeNode`] from a non-empty set of finalized
/// boxes: a lone box becomes the root directly (no group); otherwise
/// repeated nearest-pair merges (stable-sorted by area, ties broken by
/// original insertion order) build the tree bottom-up.
///
/// `boxes` must be non-empty; reaching this with zero boxes is a
/// programmer error (spec §7 "Index collapse") caught upstream by
/// [`crate::finish`], which never calls this for an empty box list.
pub fn build_tree(boxes: Vec<TextBox>) -> TreeNode {
    assert!(!boxes.is_empty(), "build_tree requires at least one box");

    let mut nodes: Vec<TreeNode> = boxes.into_iter().map(TreeNode::Box).collect();

    while nodes.len() >= 2 {
        // Stable sort by ascending area; `sort_by` is guaranteed stable by
        // Rust, preserving original insertion order among equal areas —
        // load-bearing for the tie-break below (spec §4.6, §9).
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_by(|&a, &b| nodes[a].area().total_cmp(&nodes[b].area()));

        let mut best: Option<(usize, usize, f64)> = None;
        for (oi, &i) in order.iter().enumerate() {
            for &j in &order[oi + 1..] {
                let d = distance(&nodes[i], &nodes[j]);
                if best.is_none_or(|(_, _, best_d)| d < best_d) {
                    best = Some((i, j, d));
                }
            }
        }
        let (i, j, _) = best.expect("at least one pair exists when len >= 2");

        // Remove the higher index first so the lower index stays valid, but
        // assign left/right by area-rank (`i` is always the smaller-area
        // operand per the sorted `order`, spec §4.6's `boxes[i]`/`boxes[j]`),
        // not by which raw Vec index happened to be higher.
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let at_hi = nodes.remove(hi);
        let at_lo = nodes.remove(lo);
        let (left, right) = if i == lo { (at_lo, at_hi) } else { (at_hi, at_lo) };

        let arrangement = if left.is_vertical_flavored() { Arrangement::TbRl } else { Arrangement::LrTb };
        let merged = TextGroup::new(arrangement, left, right).finish();
        nodes.push(TreeNode::Group(merged));
    }

    nodes.pop().expect("loop invariant leaves exactly one node")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::item::{Glyph, Orientation, TextLine};

    fn box_at(x0: f64, y0: f64, x1: f64, y1: f64, orientation: Orientation) -> TextBox {
        let mut line = TextLine::new(orientation);
        line.add(Glyph::new(Rect::new(x0, y0, x1, y1), "x", orientation, x1 - x0, y1 - y0, true), 0.1);
        line.finish();
        let mut b = TextBox::new(orientation);
        b.add(line);
        b.finish();
        b
    }

    #[test]
    fn single_box_is_root_directly() {
        let b = box_at(0.0, 0.0, 10.0, 10.0, Orientation::Horizontal);
        let root = build_tree(vec![b]);
        assert!(matches!(root, TreeNode::Box(_)));
    }

    #[test]
    fn two_boxes_form_one_lrtb_group() {
        let a = box_at(0.0, 0.0, 10.0, 10.0, Orientation::Horizontal);
        let b = box_at(50.0, 50.0, 60.0, 60.0, Orientation::Horizontal);
        let root = build_tree(vec![a, b]);
        match root {
            TreeNode::Group(g) => assert_eq!(g.arrangement(), Arrangement::LrTb),
            TreeNode::Box(_) => panic!("expected a group"),
        }
    }

    #[test]
    fn overlapping_pair_merges_before_disjoint_pair() {
        // Two heavily overlapping boxes plus one far box: the overlapping
        // pair has a large negative distance and must merge first.
        let a = box_at(0.0, 0.0, 100.0, 100.0, Orientation::Horizontal);
        let b = box_at(10.0, 10.0, 90.0, 90.0, Orientation::Horizontal);
        let c = box_at(1000.0, 1000.0, 1010.0, 1010.0, Orientation::Horizontal);
        let root = build_tree(vec![a, b, c]);
        // The outer group's children should be (merge(a,b)) and c.
        match root {
            TreeNode::Group(g) => {
                let sides = [g.left(), g.right()];
                assert!(sides.iter().any(|n| matches!(n, TreeNode::Group(_))));
            }
            TreeNode::Box(_) => panic!("expected a group"),
        }
    }
}
