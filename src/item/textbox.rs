use super::{Bounded, Orientation, TextLine};
use crate::geom::Rect;

/// A connected component of lines under the widened-neighbor relation
/// (spec §3/§4.5). Lines are added in arbitrary order and sorted once on
/// [`TextBox::finish`].
#[derive(Debug, Clone)]
pub struct TextBox {
    orientation: Orientation,
    bbox: Rect,
    lines: Vec<TextLine>,
    text: String,
    finished: bool,
    index: Option<usize>,
}

impl TextBox {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            bbox: Rect::empty(),
            lines: Vec::new(),
            text: String::new(),
            finished: false,
            index: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn add(&mut self, line: TextLine) {
        debug_assert!(!self.finished, "cannot add to a finished TextBox");
        self.bbox = self.bbox.union(&line.bbox());
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Sort lines top-to-bottom (horizontal box, by descending `y1`) or
    /// right-to-left (vertical box, by descending `x1`), then concatenate
    /// their text. Stable and idempotent.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        match self.orientation {
            Orientation::Horizontal => self.lines.sort_by(|a, b| b.bbox().y1().total_cmp(&a.bbox().y1())),
            Orientation::Vertical => self.lines.sort_by(|a, b| b.bbox().x1().total_cmp(&a.bbox().x1())),
        }
        self.text = self.lines.iter().map(TextLine::text).collect();
        self.finished = true;
    }
}

impl Bounded for TextBox {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Glyph;

    fn line_at(y0: f64, y1: f64) -> TextLine {
        let mut line = TextLine::new(Orientation::Horizontal);
        line.add(Glyph::new(Rect::new(0.0, y0, 10.0, y1), "x", Orientation::Horizontal, 10.0, y1 - y0, true), 0.1);
        line.finish();
        line
    }

    #[test]
    fn finish_sorts_top_to_bottom() {
        let mut tb = TextBox::new(Orientation::Horizontal);
        tb.add(line_at(0.0, 12.0));
        tb.add(line_at(20.0, 32.0));
        tb.finish();
        assert_eq!(tb.lines()[0].bbox().y1(), 32.0);
        assert_eq!(tb.lines()[1].bbox().y1(), 12.0);
    }
}
