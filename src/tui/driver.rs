//! Blocking event loop that drives the prompt on a terminal.
//!
//! Owns the poll/read cycle and nothing else: keys go into the state
//! machine, frames come back out. The loop exits once the machine resolves
//! and removes the chrome before returning.

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

use crate::prompt::select::SelectPrompt;
use crate::tui::settings;
use crate::ui::render::RenderSurface;

/// Run `prompt` against `surface` until it resolves.
///
/// Repaints only when the frame generation or the surface width changed
/// since the last paint, so poll ticks with no input cost nothing. The
/// caller owns raw mode.
pub fn run_event_loop(
    prompt: &mut SelectPrompt,
    surface: &mut dyn RenderSurface,
) -> io::Result<()> {
    let mut painted: Option<(u64, u16)> = None;

    while !prompt.is_done() {
        let width = surface.width();
        let generation = prompt.generation();
        if painted != Some((generation, width)) {
            let frame = prompt.render(width);
            surface.paint(frame)?;
            painted = Some((generation, width));
        }

        if !event::poll(Duration::from_millis(settings::EVENT_POLL_MS))? {
            continue;
        }
        let evt = event::read()?;
        let Event::Key(key) = evt else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }
        prompt.handle_key(key);
    }

    surface.clear()
}
