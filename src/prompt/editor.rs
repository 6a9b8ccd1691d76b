//! Inline free-text editor.
//!
//! Opened when the user confirms the sentinel entry. The state machine
//! treats the editor as a black box behind [`InlineEditor`]; the concrete
//! [`LineEditor`] is a single-line buffer with char-indexed, UTF-8-safe
//! cursor operations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::span::{Line, Span};
use crate::ui::theme::ThemeToken;

/// What the editor did with a forwarded key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Key handled (or ignored); the buffer may have changed.
    Consumed,
    /// The user pressed Enter; carries the raw, untrimmed buffer.
    Submitted(String),
}

/// Single-line text entry the prompt opens for custom answers.
///
/// The machine only clears the buffer, forwards keys and renders; it never
/// reaches past this trait.
pub trait InlineEditor {
    fn set_text(&mut self, text: &str);
    fn text(&self) -> &str;
    fn handle_key(&mut self, key: KeyEvent) -> EditorEvent;
    /// Render at `width` columns. Lines never exceed `width`.
    fn render(&self, width: u16) -> Vec<Line>;
}

/// Default editor implementation.
#[derive(Debug)]
pub struct LineEditor {
    buffer: String,
    /// Cursor as a char index, `0..=char_count(buffer)`.
    cursor: usize,
    pad_x: usize,
}

impl LineEditor {
    /// `pad_x` columns of left padding align the text with the chrome.
    pub fn new(pad_x: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            pad_x,
        }
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new(1)
    }
}

impl InlineEditor for LineEditor {
    fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = char_count(&self.buffer);
    }

    fn text(&self) -> &str {
        &self.buffer
    }

    fn handle_key(&mut self, key: KeyEvent) -> EditorEvent {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let len = char_count(&self.buffer);

        match key.code {
            KeyCode::Enter => return EditorEvent::Submitted(self.buffer.clone()),
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = len,
            KeyCode::Char('u') if ctrl => {
                delete_char_range(&mut self.buffer, 0, self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char('w') if ctrl => {
                let start = previous_word_start(&self.buffer, self.cursor);
                delete_char_range(&mut self.buffer, start, self.cursor);
                self.cursor = start;
            }
            KeyCode::Backspace if alt => {
                let start = previous_word_start(&self.buffer, self.cursor);
                delete_char_range(&mut self.buffer, start, self.cursor);
                self.cursor = start;
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                insert_char_at_cursor(&mut self.buffer, &mut self.cursor, c);
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    delete_char_before_cursor(&mut self.buffer, &mut self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < len {
                    delete_char_at_cursor(&mut self.buffer, self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(len),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len,
            _ => {}
        }
        EditorEvent::Consumed
    }

    fn render(&self, width: u16) -> Vec<Line> {
        let width = width.max(1) as usize;
        let cols = width.saturating_sub(self.pad_x * 2).max(1);

        // Keep the cursor inside the visible window; when the buffer
        // overflows, pin the cursor to the right edge.
        let start = if self.cursor >= cols {
            self.cursor + 1 - cols
        } else {
            0
        };
        let visible: Vec<char> = self.buffer.chars().skip(start).take(cols).collect();
        let at = self.cursor - start;

        let mut line = Line::blank();
        if self.pad_x > 0 {
            line.push(Span::plain(" ".repeat(self.pad_x)));
        }
        if at > 0 {
            let pre: String = visible[..at].iter().collect();
            line.push(Span::themed(pre, ThemeToken::Text));
        }
        if at < visible.len() {
            line.push(Span::themed(visible[at].to_string(), ThemeToken::Text).reversed());
            let post: String = visible[at + 1..].iter().collect();
            if !post.is_empty() {
                line.push(Span::themed(post, ThemeToken::Text));
            }
        } else {
            // Cursor past the last char; the window always leaves this cell free.
            line.push(Span::themed(" ", ThemeToken::Text).reversed());
        }

        vec![line.truncated(width)]
    }
}

// ---------------------------------------------------------------------------
// Char-index buffer helpers
// ---------------------------------------------------------------------------

/// Insert one char at the current cursor position.
fn insert_char_at_cursor(buffer: &mut String, cursor: &mut usize, ch: char) {
    let byte_idx = byte_index_at_char(buffer, *cursor);
    buffer.insert(byte_idx, ch);
    *cursor += 1;
}

/// Delete one char immediately before cursor.
fn delete_char_before_cursor(buffer: &mut String, cursor: &mut usize) {
    let start = byte_index_at_char(buffer, *cursor - 1);
    let end = byte_index_at_char(buffer, *cursor);
    buffer.replace_range(start..end, "");
    *cursor -= 1;
}

/// Delete one char at the current cursor position.
fn delete_char_at_cursor(buffer: &mut String, cursor: usize) {
    let start = byte_index_at_char(buffer, cursor);
    let end = byte_index_at_char(buffer, cursor + 1);
    buffer.replace_range(start..end, "");
}

/// Delete a char range represented in char indices.
fn delete_char_range(buffer: &mut String, start_char: usize, end_char: usize) {
    if start_char >= end_char {
        return;
    }
    let start = byte_index_at_char(buffer, start_char);
    let end = byte_index_at_char(buffer, end_char);
    buffer.replace_range(start..end, "");
}

/// Return the char index where the previous word starts.
fn previous_word_start(buffer: &str, cursor: usize) -> usize {
    let mut idx = cursor;
    while idx > 0 {
        if !char_at(buffer, idx - 1).is_whitespace() {
            break;
        }
        idx -= 1;
    }
    while idx > 0 {
        if char_at(buffer, idx - 1).is_whitespace() {
            break;
        }
        idx -= 1;
    }
    idx
}

/// Convert a char index to a byte index, preserving UTF-8 boundaries.
fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    let total_chars = s.chars().count();
    if char_idx >= total_chars {
        return s.len();
    }
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Return the char value at index, or NUL when out of range.
fn char_at(s: &str, char_idx: usize) -> char {
    s.chars().nth(char_idx).unwrap_or('\0')
}

/// Return total char count for a UTF-8 string.
fn char_count(s: &str) -> usize {
    s.chars().count()
}
