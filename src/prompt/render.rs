//! Frame composition and memoization.
//!
//! `compose` builds the full chrome for one frame; [`RenderCache`] memoizes
//! it so repeated pulls at the same width are free. Every mutation on the
//! state machine invalidates the cache, which also advances a generation
//! counter the driver uses to skip redundant repaints.

use crate::prompt::editor::InlineEditor;
use crate::prompt::options::OptionList;
use crate::prompt::select::Mode;
use crate::tui::settings;
use crate::ui::span::{Line, Span};
use crate::ui::theme::ThemeToken;

/// Memoized frame, owned by the state machine.
#[derive(Debug, Default)]
pub struct RenderCache {
    lines: Option<Vec<Line>>,
    /// Width the memo was composed for; a different request recomposes.
    width: u16,
    generation: u64,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the memo. Called after every state mutation.
    pub fn invalidate(&mut self) {
        self.lines = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Monotonic change counter; advances on each invalidation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Return the memoized frame, composing via `build` when absent or when
    /// the width changed since the memo was stored.
    pub fn lines_for(&mut self, width: u16, build: impl FnOnce() -> Vec<Line>) -> &[Line] {
        if self.lines.is_none() || self.width != width {
            self.lines = Some(build());
            self.width = width;
        }
        self.lines.as_deref().unwrap_or_default()
    }
}

/// Compose one frame of prompt chrome at `width` columns.
///
/// Top to bottom: rule, question, blank, numbered options, the editor block
/// when editing, blank, mode help, rule. Every line is truncated to `width`.
pub fn compose(
    question: &str,
    options: &OptionList,
    selected: usize,
    mode: Mode,
    editor: &dyn InlineEditor,
    width: u16,
) -> Vec<Line> {
    let width = width.max(1);
    let cols = width as usize;
    let editing = mode == Mode::Editing;

    let mut lines: Vec<Line> = Vec::new();
    let mut push = |line: Line| lines.push(line.truncated(cols));

    let rule = Line::from(Span::themed(
        settings::GLYPH_RULE.repeat(cols),
        ThemeToken::Accent,
    ));
    push(rule.clone());
    push(Line::from(Span::themed(
        format!(" {question}"),
        ThemeToken::Text,
    )));
    push(Line::blank());

    for i in 0..options.len() {
        let is_selected = i == selected;
        let numbered = format!("{}. {}", i + 1, options.label(i));
        let prefix = if is_selected {
            Span::themed(settings::GLYPH_SELECTED_PREFIX, ThemeToken::Accent)
        } else {
            Span::plain(settings::INDENT_1)
        };

        let body = if options.is_other(i) && editing {
            Span::themed(
                format!("{numbered} {}", settings::GLYPH_EDIT_MARKER),
                ThemeToken::Accent,
            )
        } else if is_selected {
            Span::themed(numbered, ThemeToken::Accent)
        } else {
            Span::themed(numbered, ThemeToken::Text)
        };
        push(Line::new(vec![prefix, body]));
    }

    if editing {
        push(Line::blank());
        push(Line::from(Span::themed(
            settings::EDITOR_LABEL,
            ThemeToken::Muted,
        )));
        for editor_line in editor.render(width.saturating_sub(settings::EDITOR_INSET)) {
            let mut indented = Line::from(Span::plain(settings::EDITOR_INDENT));
            for span in editor_line.spans {
                indented.push(span);
            }
            push(indented);
        }
    }

    push(Line::blank());
    push(Line::from(Span::themed(
        settings::help_text(editing),
        ThemeToken::Dim,
    )));
    push(rule);

    lines
}
