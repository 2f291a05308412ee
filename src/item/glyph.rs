use super::{Bounded, Orientation};
use crate::geom::Rect;

/// A single positioned, sized glyph produced by the external glyph source.
/// Immutable once created: nothing downstream of the line aggregator ever
/// mutates a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    bbox: Rect,
    text: String,
    orientation: Orientation,
    advance: f64,
    size: f64,
    upright: bool,
}

impl Glyph {
    pub fn new(
        bbox: Rect,
        text: impl Into<String>,
        orientation: Orientation,
        advance: f64,
        size: f64,
        upright: bool,
    ) -> Self {
        Self {
            bbox,
            text: text.into(),
            orientation,
            advance,
            size,
            upright,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn advance(&self) -> f64 {
        self.advance
    }

    /// Height if horizontal, width if vertical (spec §3).
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn upright(&self) -> bool {
        self.upright
    }

    /// Hook for future font/style compatibility filtering between two
    /// glyphs being considered for the same line. Always `true` today;
    /// never overridden, same as the source this is ported from.
    pub fn is_compatible(&self, _other: &Glyph) -> bool {
        true
    }
}

impl Bounded for Glyph {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

/// Synthetic, position-less text fragment inserted by the line aggregator
/// to make reconstructed text readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anon {
    Space,
    Newline,
}

impl Anon {
    pub fn text(self) -> &'static str {
        match self {
            Anon::Space => " ",
            Anon::Newline => "\n",
        }
    }
}

/// A child of a [`super::TextLine`]: either a real glyph or synthetic
/// whitespace.
#[derive(Debug, Clone, PartialEq)]
pub enum LineChild {
    Glyph(Glyph),
    Anon(Anon),
}

impl LineChild {
    pub fn text(&self) -> &str {
        match self {
            LineChild::Glyph(g) => g.text(),
            LineChild::Anon(a) => a.text(),
        }
    }
}
