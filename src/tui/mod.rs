//! Terminal mechanics.
//!
//! Hosts the blocking event loop, the stderr render surface, and hardcoded
//! UI settings. The split keeps input plumbing and output mechanics away
//! from the prompt's state logic.

pub mod driver;
pub mod settings;
pub mod surface;

pub use surface::{write_lines, RawModeGuard, TerminalSurface};
