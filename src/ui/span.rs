//! Styled line fragments.
//!
//! The prompt composes frames as lists of [`Line`]s, each a sequence of
//! theme-attributed [`Span`]s. Surfaces flatten spans to styled terminal
//! output; tests read them back as plain text.

use crate::ui::theme::ThemeToken;

/// A run of text carrying at most one theme attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    /// `None` renders unstyled regardless of the active theme.
    pub token: Option<ThemeToken>,
    pub bold: bool,
    /// Swap foreground and background; used for the editor cursor cell.
    pub reverse: bool,
}

impl Span {
    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            token: None,
            bold: false,
            reverse: false,
        }
    }

    /// Text styled with a semantic theme token.
    pub fn themed(text: impl Into<String>, token: ThemeToken) -> Self {
        Self {
            token: Some(token),
            ..Self::plain(text)
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Visible width in terminal cells.
    ///
    /// Char count is the same approximation the rest of the crate uses; the
    /// prompt does not render wide glyphs beyond its own markers.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One finished line of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// A line with no spans; paints as an empty row.
    pub fn blank() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Concatenated text with styling dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Copy of this line cut to at most `max` cells, span attribution kept.
    pub fn truncated(&self, max: usize) -> Line {
        if self.width() <= max {
            return self.clone();
        }
        let mut spans = Vec::new();
        let mut remaining = max;
        for span in &self.spans {
            if remaining == 0 {
                break;
            }
            let w = span.width();
            if w <= remaining {
                spans.push(span.clone());
                remaining -= w;
            } else {
                let mut cut = span.clone();
                cut.text = span.text.chars().take(remaining).collect();
                spans.push(cut);
                remaining = 0;
            }
        }
        Line { spans }
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Line { spans: vec![span] }
    }
}
