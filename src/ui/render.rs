//! Rendering contract for the prompt surface.
//!
//! The state machine composes [`Line`]s and never touches the terminal
//! directly; this trait is the seam between them.

use crate::ui::span::Line;

/// Injectable drawing surface the prompt paints through.
///
/// [`TerminalSurface`] is the default implementation; it repaints in place
/// on stderr. Implementations own any cursor bookkeeping needed to replace
/// the previous frame.
///
/// [`TerminalSurface`]: crate::tui::surface::TerminalSurface
pub trait RenderSurface {
    /// Current width in columns.
    fn width(&self) -> u16;

    /// Replace the previous frame with `lines`.
    fn paint(&mut self, lines: &[Line]) -> std::io::Result<()>;

    /// Remove the painted frame, leaving the terminal as before the prompt.
    fn clear(&mut self) -> std::io::Result<()>;
}
