use super::glyph::{Anon, LineChild};
use super::{Bounded, Glyph, Orientation};
use crate::geom::Rect;

/// A maximal contiguous run of adjacent glyphs sharing orientation (spec
/// §3/§4.4). Built incrementally via [`TextLine::add`], sealed by
/// [`TextLine::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    orientation: Orientation,
    bbox: Rect,
    children: Vec<LineChild>,
    text: String,
    finished: bool,
    // Build-time whitespace-insertion state; meaningless after finish.
    rightmost_x1: Option<f64>,
    bottommost_y0: Option<f64>,
}

impl TextLine {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            bbox: Rect::empty(),
            children: Vec::new(),
            text: String::new(),
            finished: false,
            rightmost_x1: None,
            bottommost_y0: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs().next().is_none()
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.children.iter().filter_map(|c| match c {
            LineChild::Glyph(g) => Some(g),
            LineChild::Anon(_) => None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Append `glyph`, inserting a synthetic space first if the gap since
    /// the previous glyph exceeds `word_margin` of the new glyph's size
    /// (spec §4.4 "Whitespace insertion").
    pub fn add(&mut self, glyph: Glyph, word_margin: f64) {
        debug_assert!(!self.finished, "cannot add to a finished TextLine");
        let gbbox = glyph.bbox();
        match self.orientation {
            Orientation::Horizontal => {
                if let Some(rightmost) = self.rightmost_x1 {
                    if gbbox.x0() > rightmost + word_margin * gbbox.width() {
                        self.children.push(LineChild::Anon(Anon::Space));
                    }
                }
                self.rightmost_x1 = Some(self.rightmost_x1.map_or(gbbox.x1(), |r| r.max(gbbox.x1())));
            }
            Orientation::Vertical => {
                if let Some(bottommost) = self.bottommost_y0 {
                    if gbbox.y1() + word_margin * gbbox.height() < bottommost {
                        self.children.push(LineChild::Anon(Anon::Space));
                    }
                }
                self.bottommost_y0 = Some(self.bottommost_y0.map_or(gbbox.y0(), |b| b.min(gbbox.y0())));
            }
        }
        self.bbox = self.bbox.union(&gbbox);
        self.children.push(LineChild::Glyph(glyph));
    }

    /// Append a trailing newline and concatenate child text. Idempotent.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.children.push(LineChild::Anon(Anon::Newline));
        self.text = self.children.iter().map(LineChild::text).collect();
        self.finished = true;
    }
}

impl Bounded for TextLine {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}
