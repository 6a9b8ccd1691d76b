//! Shared test fixtures for the prompt and editor test modules.
//!
//! Key-event construction is verbose enough in crossterm that every test
//! module would otherwise rebuild the same two helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A plain key press without modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// A key press with the given modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    #[test]
    fn constructors_build_press_events() {
        let plain = key(KeyCode::Enter);
        assert_eq!(plain.code, KeyCode::Enter);
        assert_eq!(plain.modifiers, KeyModifiers::NONE);
        assert_eq!(plain.kind, KeyEventKind::Press);

        let chord = key_with(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(chord.modifiers.contains(KeyModifiers::CONTROL));
    }
}
