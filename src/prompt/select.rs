//! Prompt state machine.
//!
//! Single-threaded and event-driven: the driver feeds key events in, pulls
//! frames out, and the machine resolves its one-shot channel exactly once
//! with the outcome. Everything after that first resolution is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::prompt::editor::{EditorEvent, InlineEditor, LineEditor};
use crate::prompt::options::OptionList;
use crate::prompt::render::{compose, RenderCache};
use crate::ui::span::Line;

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the option list.
    Browsing,
    /// Typing a custom answer in the inline editor.
    Editing,
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOrigin {
    /// One of the caller's options, picked from the list.
    Selected,
    /// Free text typed through the sentinel entry.
    Custom,
}

/// How the prompt finished. Cancellation is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Answered { text: String, origin: AnswerOrigin },
    Cancelled,
}

/// The interactive single-choice prompt.
///
/// Construction hands back the receiver for the outcome; consuming the
/// sender on first resolution makes a second resolution impossible.
pub struct SelectPrompt {
    question: String,
    options: OptionList,
    mode: Mode,
    selected: usize,
    editor: Box<dyn InlineEditor + Send>,
    cache: RenderCache,
    resolver: Option<oneshot::Sender<PromptOutcome>>,
}

impl SelectPrompt {
    pub fn new(
        question: impl Into<String>,
        user_options: Vec<String>,
    ) -> (Self, oneshot::Receiver<PromptOutcome>) {
        Self::with_editor(question, user_options, Box::new(LineEditor::default()))
    }

    /// Non-emptiness of `user_options` is validated by the entry point
    /// before the machine exists.
    pub fn with_editor(
        question: impl Into<String>,
        user_options: Vec<String>,
        editor: Box<dyn InlineEditor + Send>,
    ) -> (Self, oneshot::Receiver<PromptOutcome>) {
        let (tx, rx) = oneshot::channel();
        let prompt = Self {
            question: question.into(),
            options: OptionList::new(user_options),
            mode: Mode::Browsing,
            selected: 0,
            editor,
            cache: RenderCache::new(),
            resolver: Some(tx),
        };
        (prompt, rx)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the outcome has been resolved.
    pub fn is_done(&self) -> bool {
        self.resolver.is_none()
    }

    /// Current editor buffer; empty outside of [`Mode::Editing`].
    pub fn editor_text(&self) -> &str {
        self.editor.text()
    }

    /// Frame change counter for repaint suppression.
    pub fn generation(&self) -> u64 {
        self.cache.generation()
    }

    /// Pull the current frame at `width`, memoized until the next mutation.
    pub fn render(&mut self, width: u16) -> &[Line] {
        self.cache.lines_for(width, || {
            compose(
                &self.question,
                &self.options,
                self.selected,
                self.mode,
                self.editor.as_ref(),
                width,
            )
        })
    }

    /// Feed one key event through the machine.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.is_done() {
            return;
        }
        // Ctrl+C cancels in both modes; Escape stays mode-dependent.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.resolve(PromptOutcome::Cancelled);
            return;
        }
        match self.mode {
            Mode::Browsing => self.handle_browsing(key),
            Mode::Editing => self.handle_editing(key),
        }
    }

    fn handle_browsing(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_selection(self.selected.saturating_sub(1)),
            KeyCode::Down => {
                self.move_selection((self.selected + 1).min(self.options.last_index()))
            }
            KeyCode::Enter => {
                if self.options.is_other(self.selected) {
                    self.mode = Mode::Editing;
                    self.editor.set_text("");
                    self.cache.invalidate();
                } else {
                    let text = self.options.label(self.selected).to_string();
                    self.resolve(PromptOutcome::Answered {
                        text,
                        origin: AnswerOrigin::Selected,
                    });
                }
            }
            KeyCode::Esc => self.resolve(PromptOutcome::Cancelled),
            _ => {}
        }
    }

    fn handle_editing(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.back_to_browsing();
            return;
        }
        match self.editor.handle_key(key) {
            EditorEvent::Submitted(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    // Empty submit goes back to the list; it is not a cancel.
                    self.back_to_browsing();
                } else {
                    self.resolve(PromptOutcome::Answered {
                        text: trimmed.to_string(),
                        origin: AnswerOrigin::Custom,
                    });
                }
            }
            EditorEvent::Consumed => self.cache.invalidate(),
        }
    }

    /// Clamped movement; a no-op at the edge leaves the frame memo intact.
    fn move_selection(&mut self, next: usize) {
        if next != self.selected {
            self.selected = next;
            self.cache.invalidate();
        }
    }

    fn back_to_browsing(&mut self) {
        self.mode = Mode::Browsing;
        self.editor.set_text("");
        self.cache.invalidate();
    }

    fn resolve(&mut self, outcome: PromptOutcome) {
        if let Some(tx) = self.resolver.take() {
            debug!(?outcome, "prompt resolved");
            if tx.send(outcome).is_err() {
                warn!("prompt outcome receiver dropped before resolution");
            }
        }
    }
}
