//! Unified error types for the prompt, its tool surface and configuration.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// AskError
// ---------------------------------------------------------------------------

/// Errors from running the interactive prompt.
///
/// Cancellation is not an error; it is a normal [`PromptOutcome`] variant.
///
/// [`PromptOutcome`]: crate::prompt::PromptOutcome
#[derive(Debug)]
pub enum AskError {
    /// Stdin or stderr is not a terminal, so the prompt cannot run.
    NotInteractive,
    /// The caller supplied an empty option list.
    NoOptions,
    /// Terminal I/O failed while drawing or reading events.
    Io(std::io::Error),
    /// The prompt loop ended without resolving an outcome.
    ResolutionLost,
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInteractive => write!(f, "no interactive terminal available"),
            Self::NoOptions => write!(f, "no options provided"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::ResolutionLost => write!(f, "prompt ended without a result"),
        }
    }
}

impl std::error::Error for AskError {}

impl From<std::io::Error> for AskError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ToolError
// ---------------------------------------------------------------------------

/// Errors arising from tool execution.
#[derive(Debug)]
pub enum ToolError {
    /// The caller supplied arguments the tool couldn't parse.
    InvalidArguments(String),
    /// The tool ran but encountered a failure.
    ExecutionFailed(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            Self::ExecutionFailed(msg) => write!(f, "execution failed: {msg}"),
        }
    }
}

impl std::error::Error for ToolError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the config file failed; carries the path for the report.
    Io(PathBuf, std::io::Error),
    /// The file read fine but is not valid TOML.
    Toml(PathBuf, toml::de::Error),
    /// The TOML parsed but a value is out of range or unknown.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "read {}: {e}", path.display()),
            Self::Toml(path, e) => write!(f, "parse {}: {e}", path.display()),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
