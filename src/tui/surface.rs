//! Terminal render surface.
//!
//! Stderr-backed implementation of [`RenderSurface`]: paints a frame, then
//! replaces it in place on the next paint by moving back up and clearing.
//! Stdout stays untouched so the final answer can be piped.

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

use crate::tui::settings;
use crate::ui::render::RenderSurface;
use crate::ui::span::{Line, Span};
use crate::ui::theme;

/// Raw mode lifetime guard so terminal state is restored on any return path.
pub struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Repaint-in-place surface on stderr.
pub struct TerminalSurface {
    stderr: io::Stderr,
    color: bool,
    /// Rows above the cursor from the previous paint.
    previous_rows: usize,
    width_cap: Option<u16>,
}

impl TerminalSurface {
    pub fn new(color: bool, width_cap: Option<u16>) -> Self {
        Self {
            stderr: io::stderr(),
            color,
            previous_rows: 0,
            width_cap,
        }
    }
}

impl RenderSurface for TerminalSurface {
    fn width(&self) -> u16 {
        let cols = terminal::size()
            .map(|(cols, _rows)| cols)
            .unwrap_or(settings::FALLBACK_COLUMNS);
        let cols = if cols == 0 {
            settings::FALLBACK_COLUMNS
        } else {
            cols
        };
        match self.width_cap {
            Some(cap) => cols.min(cap.max(1)),
            None => cols,
        }
    }

    fn paint(&mut self, lines: &[Line]) -> io::Result<()> {
        if self.previous_rows > 0 {
            self.stderr.queue(MoveUp(self.previous_rows as u16))?;
        }
        self.stderr.queue(MoveToColumn(0))?;
        self.stderr.queue(Clear(ClearType::FromCursorDown))?;

        for (idx, line) in lines.iter().enumerate() {
            if idx > 0 {
                // Raw mode needs explicit carriage returns.
                self.stderr.queue(Print("\r\n"))?;
            }
            for span in &line.spans {
                queue_span(&mut self.stderr, span, self.color)?;
            }
        }
        self.stderr.flush()?;

        // Frames are pre-truncated to the width, so one line is one row and
        // the cursor rests on the last of them.
        self.previous_rows = lines.len().saturating_sub(1);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.previous_rows > 0 {
            self.stderr.queue(MoveUp(self.previous_rows as u16))?;
        }
        self.stderr.queue(MoveToColumn(0))?;
        self.stderr.queue(Clear(ClearType::FromCursorDown))?;
        self.stderr.flush()?;
        self.previous_rows = 0;
        Ok(())
    }
}

/// Write styled lines to `w` outside of raw mode, one per row.
///
/// Used for transcript-style output around the interactive frame.
pub fn write_lines<W: Write>(w: &mut W, lines: &[Line], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            queue_span(w, span, color)?;
        }
        w.queue(Print("\n"))?;
    }
    w.flush()
}

fn queue_span<W: Write>(w: &mut W, span: &Span, color: bool) -> io::Result<()> {
    if !color || (span.token.is_none() && !span.bold && !span.reverse) {
        w.queue(Print(&span.text))?;
        return Ok(());
    }
    let mut styled = match span.token {
        Some(token) => span.text.clone().with(theme::color(token)),
        None => span.text.clone().stylize(),
    };
    if span.bold {
        styled = styled.bold();
    }
    if span.reverse {
        styled = styled.reverse();
    }
    w.queue(PrintStyledContent(styled))?;
    Ok(())
}
