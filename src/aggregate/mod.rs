//! The three-stage clustering pipeline: glyphs → lines → boxes → tree.

pub mod boxes;
pub mod lines;
pub mod tree;

pub use boxes::aggregate_boxes;
pub use lines::aggregate_lines;
pub use tree::build_tree;
