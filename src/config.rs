//! Configuration loading.
//!
//! Sources in precedence order: explicit `--config` path, local
//! `./askline.toml`, then the per-user `<config dir>/askline/askline.toml`.
//! A missing explicit path is an error; missing implicit files fall through
//! to built-in defaults. All file and environment access goes through
//! injectable closures so tests never touch the real filesystem.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::prompt::AskStyle;

const LOCAL_CONFIG_FILE: &str = "askline.toml";
const DEFAULT_THEME: &str = "dark";

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub display: DisplayConfig,
    pub prompt: PromptConfig,
    /// Custom theme color tables keyed by theme name, applied on top of the
    /// built-ins at theme initialization.
    pub themes: BTreeMap<String, BTreeMap<String, String>>,
}

impl Config {
    /// Presentation settings for the interactive prompt.
    pub fn ask_style(&self) -> AskStyle {
        AskStyle {
            color: self.display.color,
            width_cap: self.prompt.max_width,
            editor_padding: self.prompt.editor_padding,
        }
    }
}

/// Display preferences stored under `[display]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Prompt behavior stored under `[prompt]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Left padding inside the inline editor.
    pub editor_padding: usize,
    /// Upper bound on the chrome width; narrower terminals still win.
    pub max_width: Option<u16>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            editor_padding: 1,
            max_width: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    display: DisplayConfig,
    prompt: PromptConfig,
    themes: BTreeMap<String, BTreeMap<String, String>>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let Some((path, text)) = read_config_text(path_override, &read_file, &config_root)? else {
        return Ok(Config::default());
    };
    let parsed: FileConfig =
        toml::from_str(&text).map_err(|e| ConfigError::Toml(path.clone(), e))?;
    resolve_file_config(parsed)
}

/// Read config text from the highest-precedence available source.
fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<Option<(PathBuf, String)>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // 1) Explicit override path from the CLI takes absolute precedence and
    //    must exist.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
        return Ok(Some((path, text)));
    }

    // 2) Local file next to the invocation.
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if let Ok(text) = read_file(&local) {
        return Ok(Some((local, text)));
    }

    // 3) Per-user config.
    if let Some(dir) = config_root() {
        let global = dir.join("askline").join(LOCAL_CONFIG_FILE);
        if let Ok(text) = read_file(&global) {
            return Ok(Some((global, text)));
        }
    }

    Ok(None)
}

fn resolve_file_config(file: FileConfig) -> Result<Config, ConfigError> {
    if file.prompt.max_width == Some(0) {
        return Err(ConfigError::Invalid(
            "prompt.max_width must be at least 1".to_string(),
        ));
    }
    let mut display = file.display;
    let trimmed = display.theme.trim();
    display.theme = if trimmed.is_empty() {
        DEFAULT_THEME.to_string()
    } else {
        trimmed.to_string()
    };
    Ok(Config {
        display,
        prompt: file.prompt,
        themes: file.themes,
    })
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    config_root_dir_with(|name| std::env::var(name).ok())
}

fn config_root_dir_with<FEnv>(env_lookup: FEnv) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(path) = env_lookup("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
