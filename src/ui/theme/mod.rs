//! Color themes for the prompt chrome.
//!
//! Rendering never names a concrete color; spans carry a [`ThemeToken`] and
//! the active theme decides what each token looks like. Built-ins cover
//! dark, light and solarized terminals, and `[themes.<name>]` config tables
//! restyle any token per theme.

use crossterm::style::Color;
use std::collections::BTreeMap;
use std::sync::{OnceLock, RwLock};

/// What a piece of chrome means, independent of any palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeToken {
    /// Rules, the selection marker, selected option text.
    Accent,
    /// Question and unselected options.
    Text,
    /// Secondary labels, the editor caption.
    Muted,
    /// Help lines.
    Dim,
    /// Result check marks.
    Success,
    /// Cancellation notices.
    Warning,
    /// Tool name in transcript lines.
    ToolTitle,
}

impl ThemeToken {
    /// Config key used in `[themes.<name>]` tables.
    pub fn key(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Text => "text",
            Self::Muted => "muted",
            Self::Dim => "dim",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::ToolTitle => "tool_title",
        }
    }

    fn all() -> [ThemeToken; 7] {
        [
            Self::Accent,
            Self::Text,
            Self::Muted,
            Self::Dim,
            Self::Success,
            Self::Warning,
            Self::ToolTitle,
        ]
    }

    fn parse(key: &str) -> Option<ThemeToken> {
        let wanted = key.trim().to_ascii_lowercase();
        Self::all().into_iter().find(|t| t.key() == wanted)
    }
}

/// A color for every token. Total by construction, so theme lookups can
/// never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
    dim: Color,
    success: Color,
    warning: Color,
    tool_title: Color,
}

impl Palette {
    fn get(&self, token: ThemeToken) -> Color {
        match token {
            ThemeToken::Accent => self.accent,
            ThemeToken::Text => self.text,
            ThemeToken::Muted => self.muted,
            ThemeToken::Dim => self.dim,
            ThemeToken::Success => self.success,
            ThemeToken::Warning => self.warning,
            ThemeToken::ToolTitle => self.tool_title,
        }
    }

    fn set(&mut self, token: ThemeToken, color: Color) {
        match token {
            ThemeToken::Accent => self.accent = color,
            ThemeToken::Text => self.text = color,
            ThemeToken::Muted => self.muted = color,
            ThemeToken::Dim => self.dim = color,
            ThemeToken::Success => self.success = color,
            ThemeToken::Warning => self.warning = color,
            ThemeToken::ToolTitle => self.tool_title = color,
        }
    }
}

// One Dark.
const DARK: Palette = Palette {
    accent: Color::Rgb { r: 0x61, g: 0xaf, b: 0xef },
    text: Color::Rgb { r: 0xab, g: 0xb2, b: 0xbf },
    muted: Color::Rgb { r: 0x82, g: 0x8c, b: 0x99 },
    dim: Color::Rgb { r: 0x5c, g: 0x63, b: 0x70 },
    success: Color::Rgb { r: 0x98, g: 0xc3, b: 0x79 },
    warning: Color::Rgb { r: 0xe5, g: 0xc0, b: 0x7b },
    tool_title: Color::Rgb { r: 0xe5, g: 0xc0, b: 0x7b },
};

// One Light.
const LIGHT: Palette = Palette {
    accent: Color::Rgb { r: 0x01, g: 0x84, b: 0xbc },
    text: Color::Rgb { r: 0x38, g: 0x3a, b: 0x42 },
    muted: Color::Rgb { r: 0x69, g: 0x6c, b: 0x77 },
    dim: Color::Rgb { r: 0xa0, g: 0xa1, b: 0xa7 },
    success: Color::Rgb { r: 0x50, g: 0xa1, b: 0x4f },
    warning: Color::Rgb { r: 0xc1, g: 0x84, b: 0x01 },
    tool_title: Color::Rgb { r: 0xc1, g: 0x84, b: 0x01 },
};

// Solarized Dark: blue accent, base2/base1/base00 text ramp, green/yellow
// status colors.
const SOLARIZED: Palette = Palette {
    accent: Color::Rgb { r: 0x26, g: 0x8b, b: 0xd2 },
    text: Color::Rgb { r: 0xee, g: 0xe8, b: 0xd5 },
    muted: Color::Rgb { r: 0x93, g: 0xa1, b: 0xa1 },
    dim: Color::Rgb { r: 0x65, g: 0x7b, b: 0x83 },
    success: Color::Rgb { r: 0x85, g: 0x99, b: 0x00 },
    warning: Color::Rgb { r: 0xb5, g: 0x89, b: 0x00 },
    tool_title: Color::Rgb { r: 0xb5, g: 0x89, b: 0x00 },
};

/// A named palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    palette: Palette,
}

impl Theme {
    pub fn color(&self, token: ThemeToken) -> Color {
        self.palette.get(token)
    }
}

/// The themes a run can switch between.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl ThemeRegistry {
    /// Just the three built-ins.
    pub fn builtin() -> Self {
        let mut themes = BTreeMap::new();
        for (name, palette) in [("dark", DARK), ("light", LIGHT), ("solarized", SOLARIZED)] {
            themes.insert(
                name.to_string(),
                Theme {
                    name: name.to_string(),
                    palette,
                },
            );
        }
        Self { themes }
    }

    /// Built-ins plus config override tables.
    ///
    /// A table whose name matches a built-in restyles it; any other name
    /// defines a new theme starting from the dark palette. Unknown token
    /// keys and unparsable colors are errors naming the offender.
    pub fn from_overrides(
        overrides: &BTreeMap<String, BTreeMap<String, String>>,
    ) -> Result<Self, String> {
        let mut registry = Self::builtin();
        for (raw_name, table) in overrides {
            let name = canonical_name(raw_name);
            let mut palette = registry
                .themes
                .get(&name)
                .map(|theme| theme.palette)
                .unwrap_or(DARK);
            for (key, value) in table {
                let token = ThemeToken::parse(key)
                    .ok_or_else(|| format!("theme `{name}`: unknown theme key `{key}`"))?;
                let color = parse_color(value).map_err(|e| format!("theme `{name}`: {e}"))?;
                palette.set(token, color);
            }
            registry.themes.insert(
                name.clone(),
                Theme {
                    name: name.clone(),
                    palette,
                },
            );
        }
        Ok(registry)
    }

    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(&canonical_name(name))
    }
}

// ---------------------------------------------------------------------------
// Global state
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ThemeState {
    registry: ThemeRegistry,
    active: String,
}

fn global() -> &'static RwLock<ThemeState> {
    static STATE: OnceLock<RwLock<ThemeState>> = OnceLock::new();
    STATE.get_or_init(|| {
        RwLock::new(ThemeState {
            registry: ThemeRegistry::builtin(),
            active: "dark".to_string(),
        })
    })
}

/// Install the registry built from config overrides and pick the starting
/// theme. A start name the registry does not know falls back to dark, so a
/// stale config file cannot take the prompt down.
pub fn initialize(
    start: &str,
    overrides: &BTreeMap<String, BTreeMap<String, String>>,
) -> Result<(), String> {
    let registry = ThemeRegistry::from_overrides(overrides)?;
    let mut active = canonical_name(start);
    if registry.get(&active).is_none() {
        active = "dark".to_string();
    }
    let mut state = global()
        .write()
        .map_err(|_| "theme state lock poisoned".to_string())?;
    state.registry = registry;
    state.active = active;
    Ok(())
}

/// Switch themes by name; unknown names are an error listing what exists.
pub fn set_active_theme(name: &str) -> Result<(), String> {
    let mut state = global()
        .write()
        .map_err(|_| "theme state lock poisoned".to_string())?;
    let wanted = canonical_name(name);
    if state.registry.get(&wanted).is_none() {
        return Err(format!(
            "unknown theme `{name}`. Available themes: {}",
            state.registry.names().join(", ")
        ));
    }
    state.active = wanted;
    Ok(())
}

/// Name of the active theme.
pub fn active_theme_name() -> String {
    global()
        .read()
        .map(|state| state.active.clone())
        .unwrap_or_else(|_| "dark".to_string())
}

/// Color of `token` in the active theme.
pub fn color(token: ThemeToken) -> Color {
    match global().read() {
        Ok(state) => state
            .registry
            .get(&state.active)
            .map_or(DARK.get(token), |theme| theme.color(token)),
        Err(_) => DARK.get(token),
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Trimmed and lowercased; an empty name means dark.
fn canonical_name(name: &str) -> String {
    let cleaned = name.trim().to_ascii_lowercase();
    if cleaned.is_empty() {
        "dark".to_string()
    } else {
        cleaned
    }
}

/// `#RRGGBB` hex or a crossterm color name.
fn parse_color(value: &str) -> Result<Color, String> {
    let text = value.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err("theme color value cannot be empty".to_string());
    }
    if let Some(hex) = text.strip_prefix('#') {
        let packed = (hex.len() == 6)
            .then(|| u32::from_str_radix(hex, 16).ok())
            .flatten()
            .ok_or_else(|| format!("invalid hex color `{value}` (expected #RRGGBB)"))?;
        return Ok(Color::Rgb {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        });
    }
    named_color(&text).ok_or_else(|| format!("unsupported color value `{value}`"))
}

fn named_color(name: &str) -> Option<Color> {
    let compact = name.replace(['-', '_'], "");
    let color = match compact.as_str() {
        "black" => Color::Black,
        "darkgrey" | "darkgray" => Color::DarkGrey,
        "grey" | "gray" => Color::Grey,
        "white" => Color::White,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        _ => return None,
    };
    Some(color)
}
