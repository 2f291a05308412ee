use super::{Bounded, Orientation, TextBox};
use crate::geom::Rect;

/// The direction two children of a [`TextGroup`] are arranged in (spec
/// §3/§4.6). Fixes the csort key used by [`TextGroup::finish`] and which
/// flavor a newly merged group inherits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Left-to-right, then top-to-bottom.
    LrTb,
    /// Top-to-bottom, then right-to-left.
    TbRl,
}

/// A box or a nested group: the two possible children of a [`TextGroup`].
#[derive(Debug, Clone)]
pub enum TreeNode {
    Box(TextBox),
    Group(TextGroup),
}

impl TreeNode {
    /// A node is "vertical-flavored" if it is a vertical box or a TB-RL
    /// group (spec §4.6): the tree builder uses this to decide which
    /// arrangement a newly merged group gets.
    pub fn is_vertical_flavored(&self) -> bool {
        match self {
            TreeNode::Box(b) => b.orientation() == Orientation::Vertical,
            TreeNode::Group(g) => g.arrangement() == Arrangement::TbRl,
        }
    }

    pub fn area(&self) -> f64 {
        self.bbox().area()
    }

    /// Visits every [`TextBox`] reachable from this node, left child first.
    pub fn for_each_box<'a>(&'a self, f: &mut impl FnMut(&'a TextBox)) {
        match self {
            TreeNode::Box(b) => f(b),
            TreeNode::Group(g) => {
                g.left.for_each_box(f);
                g.right.for_each_box(f);
            }
        }
    }
}

impl Bounded for TreeNode {
    fn bbox(&self) -> Rect {
        match self {
            TreeNode::Box(b) => b.bbox(),
            TreeNode::Group(g) => g.bbox(),
        }
    }
}

/// An internal node of the binary reading-order tree: exactly two children
/// (a box or another group), bbox equal to their union (spec §3).
#[derive(Debug, Clone)]
pub struct TextGroup {
    arrangement: Arrangement,
    bbox: Rect,
    left: Box<TreeNode>,
    right: Box<TreeNode>,
}

impl TextGroup {
    pub fn new(arrangement: Arrangement, left: TreeNode, right: TreeNode) -> Self {
        let bbox = left.bbox().union(&right.bbox());
        Self {
            arrangement,
            bbox,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn left(&self) -> &TreeNode {
        &self.left
    }

    pub fn right(&self) -> &TreeNode {
        &self.right
    }

    /// Reorders the two children by the arrangement-specific csort key
    /// (spec §4.6): ascending `(x0+x1)-(y0+y1)` for LR-TB (top-left
    /// first), ascending `-(x0+x1)-(y0+y1)` for TB-RL (top-right first).
    /// Rust's `sort_by_key`/`[T]::sort` is stable, which is what the
    /// tie-break on equal keys depends on.
    pub fn finish(mut self) -> Self {
        let key = |node: &TreeNode| -> f64 {
            let b = node.bbox();
            match self.arrangement {
                Arrangement::LrTb => (b.x0() + b.x1()) - (b.y0() + b.y1()),
                Arrangement::TbRl => -(b.x0() + b.x1()) - (b.y0() + b.y1()),
            }
        };
        if key(&self.right) < key(&self.left) {
            std::mem::swap(&mut self.left, &mut self.right);
        }
        self
    }
}

impl Bounded for TextGroup {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Glyph, TextLine};

    fn box_at(x0: f64, y0: f64, x1: f64, y1: f64) -> TextBox {
        let mut line = TextLine::new(Orientation::Horizontal);
        line.add(Glyph::new(Rect::new(x0, y0, x1, y1), "x", Orientation::Horizontal, x1 - x0, y1 - y0, true), 0.1);
        line.finish();
        let mut b = TextBox::new(Orientation::Horizontal);
        b.add(line);
        b.finish();
        b
    }

    #[test]
    fn lrtb_orders_top_left_first() {
        let top_left = TreeNode::Box(box_at(0.0, 80.0, 10.0, 90.0));
        let bottom_right = TreeNode::Box(box_at(50.0, 0.0, 60.0, 10.0));
        let group = TextGroup::new(Arrangement::LrTb, bottom_right, top_left).finish();
        assert!(matches!(group.left(), TreeNode::Box(b) if b.bbox().y0() == 80.0));
    }
}
