//! Theme configuration for Folio.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#6366f1"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub profile: ProfileTheme,
    #[serde(default)]
    pub gallery: GalleryTheme,
    #[serde(default)]
    pub chooser: ChooserTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Profile card colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileTheme {
    pub border_fg: String,
    pub tab_fg: String,
    pub tab_active_fg: String,
    pub indicator_fg: String,
    pub text_fg: String,
    pub muted_fg: String,
}

impl Default for ProfileTheme {
    fn default() -> Self {
        Self {
            border_fg: "#39445a".to_string(),
            tab_fg: "gray".to_string(),
            tab_active_fg: "white".to_string(),
            indicator_fg: "#6366f1".to_string(),
            text_fg: "gray".to_string(),
            muted_fg: "dark_gray".to_string(),
        }
    }
}

/// Gallery strip colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryTheme {
    pub border_fg: String,
    pub item_fg: String,
    pub focused_fg: String,
    pub cta_fg: String,
    pub disabled_fg: String,
}

impl Default for GalleryTheme {
    fn default() -> Self {
        Self {
            border_fg: "#39445a".to_string(),
            item_fg: "gray".to_string(),
            focused_fg: "#6366f1".to_string(),
            cta_fg: "gray".to_string(),
            disabled_fg: "dark_gray".to_string(),
        }
    }
}

/// "Add image" overlay colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChooserTheme {
    pub border_fg: String,
    pub selected_fg: String,
    pub dir_fg: String,
    pub error_fg: String,
}

impl Default for ChooserTheme {
    fn default() -> Self {
        Self {
            border_fg: "#233043".to_string(),
            selected_fg: "yellow".to_string(),
            dir_fg: "blue".to_string(),
            error_fg: "#fb7185".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "#12161a".to_string(),
            fg: "gray".to_string(),
            message_fg: "magenta".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;
    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}
