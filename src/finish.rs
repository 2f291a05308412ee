//! The `finish` entry point: runs the three clustering stages and assigns
//! reading-order indices (spec §4.7).

use crate::aggregate::{aggregate_boxes, aggregate_lines, build_tree};
use crate::item::{Figure, Glyph, Item, LayoutContainer, Page, TextBox, TreeNode};
use crate::params::LAParams;

/// Runs the layout pipeline over a [`Page`]: partitions glyphs from
/// non-text, runs lines → boxes → tree, assigns dense reading indices, and
/// reorders the page's items (boxes by reading order, then non-text items
/// in their original order). A `None` `laparams` on the page suppresses
/// analysis entirely, matching the source's "a `None`-valued parameter
/// object suppresses layout analysis" (spec.md §9).
///
/// Recurses into each top-level [`Figure`] per [`Figure::should_analyze`]
/// (spec §4.7's last paragraph), regardless of whether the page itself
/// has layout analysis enabled.
pub fn finish_page(page: &mut Page) {
    if let Some(params) = page.laparams().cloned() {
        finish_container(page, &params);
    }
    recurse_into_figures(page.items_mut());
}

/// Runs the same pipeline on a [`Figure`]'s own children, but only when
/// [`Figure::should_analyze`] holds (spec §4.7: "only if `all_texts` is
/// enabled").
pub fn finish_figure(figure: &mut Figure) {
    if figure.should_analyze() {
        if let Some(params) = figure.laparams().cloned() {
            finish_container(figure, &params);
        }
    }
    recurse_into_figures(figure.items_mut());
}

fn recurse_into_figures(items: &mut [Item]) {
    for item in items {
        if let Item::Figure(figure) = item {
            finish_figure(figure);
        }
    }
}

fn finish_container(container: &mut impl LayoutContainer, params: &LAParams) {
    let (glyph_items, other): (Vec<Item>, Vec<Item>) =
        container.items_mut().drain(..).partition(|item| matches!(item, Item::Glyph(_)));

    let glyphs: Vec<Glyph> = glyph_items
        .into_iter()
        .map(|item| match item {
            Item::Glyph(g) => g,
            _ => unreachable!("partition guarantees only glyphs here"),
        })
        .collect();

    log::trace!("finish: {} glyphs, {} non-glyph items", glyphs.len(), other.len());

    if glyphs.is_empty() {
        // Nothing to analyze; restore the untouched non-glyph items as-is
        // and leave `layout` unset (spec §7 "Empty page").
        container.set_layout(other, None);
        return;
    }

    let lines = aggregate_lines(glyphs, params.line_overlap, params.char_margin, params.word_margin);
    log::debug!("finish: {} text lines", lines.len());

    let boxes = aggregate_boxes(lines, params.line_margin);
    log::debug!("finish: {} text boxes", boxes.len());

    let root = build_tree(boxes);

    let mut ordered_boxes: Vec<TextBox> = Vec::new();
    assign_reading_order(&root, &mut ordered_boxes);
    log::trace!("finish: assigned {} reading-order indices", ordered_boxes.len());

    let mut reordered: Vec<Item> = ordered_boxes
        .into_iter()
        .enumerate()
        .map(|(index, mut b)| {
            b.set_index(index);
            Item::TextBox(b)
        })
        .collect();
    reordered.extend(other);

    container.set_layout(reordered, Some(root));
}

/// Walks the tree left-child-first, right-child-last, collecting boxes in
/// reading order (spec §4.7 step 4). The dense `0..N` index is the
/// position each box lands at in `out`.
fn assign_reading_order(node: &TreeNode, out: &mut Vec<TextBox>) {
    match node {
        TreeNode::Box(b) => out.push(b.clone()),
        TreeNode::Group(g) => {
            assign_reading_order(g.left(), out);
            assign_reading_order(g.right(), out);
        }
    }
}
