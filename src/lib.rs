//! Askline — a single-question terminal prompt with a free-form escape hatch.
//!
//! Shows a question with a fixed option list plus a synthetic trailing
//! `Other...` entry; picking that entry opens an inline editor. The chrome
//! is painted on stderr and replaced in place, stdout stays clean for the
//! answer, and every run resolves exactly once: a selected option, written
//! text, or cancellation.
//!
//! # Quick start
//!
//! ```no_run
//! use askline::prompt::{ask, PromptOutcome};
//!
//! # async fn example() {
//! let options = vec!["Yes".to_string(), "No".to_string()];
//! match ask("Deploy now?", &options).await.unwrap() {
//!     PromptOutcome::Answered { text, .. } => println!("{text}"),
//!     PromptOutcome::Cancelled => eprintln!("cancelled"),
//! }
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod prompt;
#[cfg(test)]
pub mod testsupport;
pub mod tools;
pub mod tui;
pub mod types;
pub mod ui;
