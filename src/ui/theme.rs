//! Dashboard color palettes and the ANSI escapes built from them.
//!
//! Four Catppuccin palettes are compiled in; a custom palette can be loaded
//! from a TOML file with the same shape as `themes/catppuccin-mocha.toml`:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! # header_bg is optional
//! favorite_fg = "#f38ba8"
//! blocked_fg = "#fab387"
//! available_fg = "#a6e3a1"
//! overlay_border = "#89b4fa"
//! # ...plus selection, text, border, search and empty-state colors
//! ```

use crate::domain::error::{ProfileDeckError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Theme used when none is configured or the configured one fails to load.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Palettes embedded in the plugin binary, by name.
const BUILTIN_THEMES: [(&str, &str); 4] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

/// A named palette.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every dashboard element.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints and secondary row columns.
    pub text_dim: String,
    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Loading screen and "no match" notices.
    pub empty_state_fg: String,

    /// Badge colors, one per section.
    pub favorite_fg: String,
    pub blocked_fg: String,
    pub available_fg: String,

    pub overlay_border: String,
}

impl Theme {
    /// Looks up a compiled-in palette. `None` for unknown names.
    ///
    /// ```rust
    /// use profiledeck::ui::Theme;
    ///
    /// assert!(Theme::from_name("catppuccin-frappe").is_some());
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, source) = BUILTIN_THEMES.iter().find(|(builtin, _)| *builtin == name)?;
        toml::from_str(source).ok()
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ProfileDeckError::Io`] if the file cannot be read,
    /// [`ProfileDeckError::Theme`] if it is not a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ProfileDeckError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Truecolor foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// Truecolor background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears every active style.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// # Panics
    ///
    /// Only if the embedded default palette is malformed, which the theme
    /// tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("embedded default theme parses")
    }
}

/// Splits `"#rrggbb"` (leading `#` optional) into channels. Anything else
/// renders as white.
fn parse_hex(hex: &str) -> (u8, u8, u8) {
    const WHITE: (u8, u8, u8) = (255, 255, 255);

    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return WHITE;
    }
    let Ok(packed) = u32::from_str_radix(digits, 16) else {
        return WHITE;
    };
    let [_, r, g, b] = packed.to_be_bytes();
    (r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_theme_parses() {
        for (name, _) in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let (_, mocha) = BUILTIN_THEMES[0];
        let custom = mocha
            .replace("name = \"catppuccin-mocha\"", "name = \"custom\"")
            .replace("favorite_fg = \"#f38ba8\"", "favorite_fg = \"#ff0000\"");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{custom}").unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded.name, "custom");
        assert_eq!(loaded.colors.favorite_fg, "#ff0000");
        assert_eq!(loaded.colors.header_bg, None);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"").unwrap();

        assert!(matches!(
            Theme::from_file(file.path()),
            Err(ProfileDeckError::Theme(_))
        ));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Theme::from_file(dir.path().join("nope.toml")),
            Err(ProfileDeckError::Io(_))
        ));
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("00ff00"), "\u{1b}[48;2;0;255;0m");
        assert_eq!(Theme::fg("bad"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#gg0000"), "\u{1b}[38;2;255;255;255m");
    }
}
