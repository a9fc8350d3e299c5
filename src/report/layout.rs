//! Pagination of a [`Document`] onto A4 pages.
//!
//! Pure and deterministic: text is wrapped greedily using an average glyph
//! width per style, so no font metrics are needed.

use super::{Block, Document, TextStyle};

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 72.0;

const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const CONTENT_HEIGHT: f32 = PAGE_HEIGHT - 2.0 * MARGIN;

/// One laid out line. `x` and `y` are in points from the bottom-left corner;
/// `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub style: TextStyle,
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

fn glyph_width(style: TextStyle) -> f32 {
    let factor = if style.bold() { 0.56 } else { 0.5 };
    style.font_size() * factor
}

fn text_width(style: TextStyle, text: &str) -> f32 {
    text.chars().count() as f32 * glyph_width(style)
}

/// Greedy word wrap to at most `max_chars` per line. Words longer than a line
/// are split. `\n` always breaks.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut len = 0;
        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            while chars.len() > max_chars {
                if len > 0 {
                    out.push(std::mem::take(&mut line));
                    len = 0;
                }
                let rest = chars.split_off(max_chars);
                out.push(chars.into_iter().collect());
                chars = rest;
            }
            let wlen = chars.len();
            if len > 0 && len + 1 + wlen > max_chars {
                out.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.extend(chars);
            len += wlen;
        }
        if len > 0 || out.is_empty() {
            out.push(line);
        }
    }
    out
}

struct Cursor {
    pages: Vec<PageLayout>,
    current: PageLayout,
    /// Distance consumed from the top of the content area.
    used: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: PageLayout::default(),
            used: 0.0,
        }
    }

    fn at_top(&self) -> bool {
        self.current.lines.is_empty() && self.used == 0.0
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.used = 0.0;
    }

    fn advance(&mut self, points: f32) {
        if self.used + points >= CONTENT_HEIGHT {
            if self.current.lines.is_empty() {
                self.used = 0.0;
            } else {
                self.new_page();
            }
        } else {
            self.used += points;
        }
    }

    fn place(&mut self, style: TextStyle, text: String) {
        let leading = style.leading();
        if self.used + leading > CONTENT_HEIGHT && !self.current.lines.is_empty() {
            self.new_page();
        }
        let x = if style.centered() {
            MARGIN + ((CONTENT_WIDTH - text_width(style, &text)) / 2.0).max(0.0)
        } else {
            MARGIN + style.indent()
        };
        let y = PAGE_HEIGHT - MARGIN - self.used - style.font_size();
        self.current.lines.push(PlacedLine { style, text, x, y });
        self.used += leading;
    }

    fn finish(mut self) -> Vec<PageLayout> {
        if !self.current.lines.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Lay out every block. Always yields at least one page.
pub fn paginate(doc: &Document) -> Vec<PageLayout> {
    let mut cursor = Cursor::new();
    for block in &doc.blocks {
        match block {
            Block::Text { style, text } => {
                let style = *style;
                if !cursor.at_top() {
                    cursor.advance(style.space_before());
                }
                let width = CONTENT_WIDTH - style.indent();
                let max_chars = (width / glyph_width(style)).floor() as usize;
                for line in wrap(text, max_chars) {
                    cursor.place(style, line);
                }
                cursor.advance(style.space_after());
            }
            Block::Spacer(points) => cursor.advance(*points),
            Block::PageBreak => {
                if !cursor.current.lines.is_empty() {
                    cursor.new_page();
                } else {
                    cursor.used = 0.0;
                }
            }
        }
    }
    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioProfile;
    use crate::report::{charter, project_report};

    #[test]
    fn wrap_is_greedy() {
        assert_eq!(wrap("aa bb cc dd", 5), ["aa bb", "cc dd"]);
        assert_eq!(wrap("abcdefgh", 3), ["abc", "def", "gh"]);
        assert_eq!(wrap("one\ntwo", 80), ["one", "two"]);
        assert_eq!(wrap("", 10), [""]);
    }

    #[test]
    fn explicit_breaks_start_pages() {
        let mut doc = Document::new("t");
        doc.body("first").page_break().body("second").page_break().body("third");
        let pages = paginate(&doc);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].lines[0].text, "third");
    }

    #[test]
    fn leading_break_does_not_add_blank_page() {
        let mut doc = Document::new("t");
        doc.page_break().body("only");
        assert_eq!(paginate(&doc).len(), 1);
        assert_eq!(paginate(&Document::new("empty")).len(), 1);
    }

    #[test]
    fn overflow_continues_on_next_page() {
        let mut doc = Document::new("t");
        for i in 0..120 {
            doc.body(format!("line {}", i));
        }
        let pages = paginate(&doc);
        assert!(pages.len() > 1);
        let total: usize = pages.iter().map(|p| p.lines.len()).sum();
        assert_eq!(total, 120);
        for page in &pages {
            for line in &page.lines {
                assert!(line.y >= MARGIN - 1.0, "line below bottom margin: {}", line.y);
                assert!(line.y <= PAGE_HEIGHT - MARGIN);
            }
        }
    }

    #[test]
    fn lines_fit_the_content_width() {
        let doc = project_report::build(&PortfolioProfile::default());
        for page in paginate(&doc) {
            for line in page.lines {
                let right = line.x + text_width(line.style, &line.text);
                assert!(right <= PAGE_WIDTH - MARGIN + 0.5, "{:?}", line.text);
            }
        }
    }

    #[test]
    fn pagination_is_deterministic() {
        let profile = PortfolioProfile::default();
        let doc = charter::build(&profile);
        let first = paginate(&doc);
        assert_eq!(first, paginate(&charter::build(&profile)));
        assert!(first.len() >= doc.page_breaks() + 1);
    }
}
