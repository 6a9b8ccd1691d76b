//! Centralized, hardcoded UI settings for the prompt surface.
//!
//! This is the single place to tweak chrome strings, glyphs, indentation,
//! and event-loop timing.

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const FALLBACK_COLUMNS: u16 = 100;

/// The editor block renders this much narrower than the frame and is shifted
/// right by [`EDITOR_INDENT`] so its text lines up under the options.
pub const EDITOR_INSET: u16 = 2;
pub const EDITOR_INDENT: &str = " ";

// ---------------------------------------------------------------------------
// Chrome strings
// ---------------------------------------------------------------------------

pub const GLYPH_RULE: &str = "─";
pub const GLYPH_SELECTED_PREFIX: &str = "> ";
pub const GLYPH_EDIT_MARKER: &str = "✎";
pub const GLYPH_RESULT_OK: &str = "✓ ";

pub const EDITOR_LABEL: &str = " Your answer:";

pub const HELP_BROWSING: &str = " ↑↓ navigate • Enter to select • Esc to cancel";
pub const HELP_EDITING: &str = " Enter to submit • Esc to go back";

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

pub const EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

pub fn help_text(editing: bool) -> &'static str {
    if editing {
        HELP_EDITING
    } else {
        HELP_BROWSING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_tracks_mode() {
        assert_eq!(help_text(false), HELP_BROWSING);
        assert_eq!(help_text(true), HELP_EDITING);
    }
}
