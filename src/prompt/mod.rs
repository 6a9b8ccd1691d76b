//! Interactive single-choice prompt.
//!
//! A question plus options becomes a navigable menu with a synthetic
//! "Other..." entry that opens an inline editor. The machine resolves
//! exactly once: a picked option, a typed custom answer, or a cancellation.

pub mod ask;
pub mod editor;
pub mod options;
pub mod render;
pub mod select;

pub use ask::{ask, ask_with, AskStyle};
pub use editor::{EditorEvent, InlineEditor, LineEditor};
pub use options::{OptionList, OTHER_LABEL};
pub use select::{AnswerOrigin, Mode, PromptOutcome, SelectPrompt};
