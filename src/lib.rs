#![doc = include_str!("../README.md")]

#![cfg_attr(docsrs, feature(doc_cfg))]

/// The three-stage clustering pipeline: glyphs → lines → boxes → tree.
pub mod aggregate;
/// Ingress validation errors.
pub mod error;
/// `finish`: runs the clustering pipeline and assigns reading-order indices.
pub mod finish;
/// Bounding-box arithmetic shared by every stage of the pipeline.
pub mod geom;
/// The typed item model: glyphs, lines, boxes, groups, pages, figures.
pub mod item;
/// Tuning knobs for the layout pipeline (`LAParams`).
pub mod params;
/// Grid-bucketed spatial index for bbox region queries.
pub mod plane;

// common re-exports
pub use error::LayoutError;
pub use finish::{finish_figure, finish_page};
pub use geom::Rect;
pub use item::{
    Anon, Arrangement, Bounded, Figure, Glyph, Item, LayoutContainer, NonText, NonTextKind, Orientation, Page,
    TextBox, TextGroup, TreeNode,
};
pub use params::{LAParams, WritingMode};

// re-export the dependency `Rect` is a newtype over
pub use euclid;
