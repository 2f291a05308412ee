use super::{Bounded, Glyph, TextBox, TreeNode};
use crate::geom::Rect;
use crate::params::LAParams;

/// Geometry carried by a non-text graphic item. Passed through unchanged,
/// excluded from clustering (spec §3).
#[derive(Debug, Clone, PartialEq)]
pub enum NonTextKind {
    Polyline(Vec<(f64, f64)>),
    Rect,
    Image { name: String },
}

/// A non-text graphic item: a line, rectangle, polygon, or image.
#[derive(Debug, Clone, PartialEq)]
pub struct NonText {
    bbox: Rect,
    kind: NonTextKind,
}

impl NonText {
    pub fn new(bbox: Rect, kind: NonTextKind) -> Self {
        Self { bbox, kind }
    }

    pub fn kind(&self) -> &NonTextKind {
        &self.kind
    }
}

impl Bounded for NonText {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

/// A top-level child of a [`Page`] or [`Figure`]. Before `finish()` runs,
/// only `Glyph`/`NonText`/`Figure` appear; `finish()` consumes every
/// `Glyph` into lines and boxes and reinserts the results as `TextBox`
/// items, ordered by reading index, ahead of the surviving `NonText`/
/// `Figure` items (spec §4.7 step 5).
#[derive(Debug, Clone)]
pub enum Item {
    Glyph(Glyph),
    NonText(NonText),
    Figure(Figure),
    TextBox(TextBox),
}

impl Bounded for Item {
    fn bbox(&self) -> Rect {
        match self {
            Item::Glyph(g) => g.bbox(),
            Item::NonText(n) => n.bbox(),
            Item::Figure(f) => f.bbox(),
            Item::TextBox(b) => b.bbox(),
        }
    }
}

/// Shared behavior of [`Page`] and [`Figure`]: both own a flat item list,
/// an optional parameter object, and gain a `layout` once `finish()` runs.
/// Mirrors the source's `LTLayoutContainer` base class, collapsed to a
/// trait since Rust has no implementation inheritance.
pub trait LayoutContainer {
    fn items(&self) -> &[Item];
    fn items_mut(&mut self) -> &mut Vec<Item>;
    fn laparams(&self) -> Option<&LAParams>;
    fn layout(&self) -> Option<&TreeNode>;
    fn set_layout(&mut self, items: Vec<Item>, layout: Option<TreeNode>);
}

/// Nested content with its own coordinate transform, analyzed recursively
/// only when `all_texts` is set (spec §4.7). A `None` `laparams` (distinct
/// from `all_texts: false`) suppresses analysis unconditionally, matching
/// the source's `LTFigure.finish` early return.
#[derive(Debug, Clone)]
pub struct Figure {
    name: String,
    bbox: Rect,
    /// Row-major 2x3 affine transform applied when the figure's content
    /// stream was interpreted; carried for the caller's benefit, unused by
    /// the layout pipeline itself.
    matrix: [f64; 6],
    laparams: Option<LAParams>,
    items: Vec<Item>,
    layout: Option<TreeNode>,
}

impl Figure {
    pub fn new(name: impl Into<String>, bbox: Rect, matrix: [f64; 6], laparams: Option<LAParams>) -> Self {
        Self {
            name: name.into(),
            bbox,
            matrix,
            laparams,
            items: Vec::new(),
            layout: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matrix(&self) -> [f64; 6] {
        self.matrix
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Whether recursing into this figure is enabled at all: a missing
    /// `laparams` or `all_texts == false` both suppress analysis (spec §4
    /// "Supplemented behavior").
    pub fn should_analyze(&self) -> bool {
        self.laparams.as_ref().is_some_and(|p| p.all_texts)
    }
}

impl Bounded for Figure {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl LayoutContainer for Figure {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    fn laparams(&self) -> Option<&LAParams> {
        self.laparams.as_ref()
    }

    fn layout(&self) -> Option<&TreeNode> {
        self.layout.as_ref()
    }

    fn set_layout(&mut self, items: Vec<Item>, layout: Option<TreeNode>) {
        self.items = items;
        self.layout = layout;
    }
}

/// The root of a single page: its id, rotation, and (after `finish`) the
/// reading-order tree.
#[derive(Debug, Clone)]
pub struct Page {
    pageid: u32,
    bbox: Rect,
    rotate: i32,
    laparams: Option<LAParams>,
    items: Vec<Item>,
    layout: Option<TreeNode>,
}

impl Page {
    pub fn new(pageid: u32, bbox: Rect, rotate: i32, laparams: Option<LAParams>) -> Self {
        Self {
            pageid,
            bbox,
            rotate,
            laparams,
            items: Vec::new(),
            layout: None,
        }
    }

    pub fn pageid(&self) -> u32 {
        self.pageid
    }

    pub fn rotate(&self) -> i32 {
        self.rotate
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }
}

impl Bounded for Page {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl LayoutContainer for Page {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    fn laparams(&self) -> Option<&LAParams> {
        self.laparams.as_ref()
    }

    fn layout(&self) -> Option<&TreeNode> {
        self.layout.as_ref()
    }

    fn set_layout(&mut self, items: Vec<Item>, layout: Option<TreeNode>) {
        self.items = items;
        self.layout = layout;
    }
}
