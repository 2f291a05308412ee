//! The typed item model: glyphs and non-text marks at the leaves, text
//! lines and boxes in the middle, the reading-order tree and page at the
//! top. Every container follows the same expandable-container pattern:
//! it starts at [`Rect::empty`], grows through `add`, and is sealed by a
//! one-shot `finish`.

pub mod glyph;
pub mod group;
pub mod line;
pub mod page;
pub mod textbox;

pub use glyph::{Anon, Glyph};
pub use group::{Arrangement, TextGroup, TreeNode};
pub use line::TextLine;
pub use page::{Figure, Item, LayoutContainer, NonText, NonTextKind, Page};
pub use textbox::TextBox;

use crate::geom::Rect;

/// Writing direction shared by lines, boxes, and the glyphs within them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Anything with a bounding box.
pub trait Bounded {
    fn bbox(&self) -> Rect;
}

impl Bounded for Rect {
    fn bbox(&self) -> Rect {
        *self
    }
}
