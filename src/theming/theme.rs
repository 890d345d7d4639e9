//! Theme model and built-in themes.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theming::Color;
use crate::tokenizing::TokenType;

/// A theme describes what colors to use when rendering certain output
/// formats, such as terminal escape codes. Several built-in themes are
/// provided, and custom themes can be loaded from YAML files whose token
/// color keys use the token type names (`keyword`, `string`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// What color to use for plain text (no highlighting).
    pub plain_text_color: Color,
    /// What color to use for the background.
    #[serde(default = "default_background")]
    pub background_color: Color,
    /// What color to use for the text's highlighted tokens.
    pub token_colors: HashMap<TokenType, Color>,
}

fn default_background() -> Color {
    Color::white(0.12)
}

/// Error produced when loading a theme for the CLI.
#[derive(Debug)]
pub enum ThemeError {
    /// The theme file could not be read.
    Io(String),
    /// The theme file was not valid YAML for a theme.
    Parse(String),
    /// The name matched no built-in theme and no readable file.
    UnknownTheme(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Io(message) => write!(f, "Failed to read theme file: {message}"),
            ThemeError::Parse(message) => write!(f, "Invalid theme file: {message}"),
            ThemeError::UnknownTheme(name) => write!(f, "Unknown theme: {name}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl Theme {
    /// The color for a given token type, falling back to white for types the
    /// theme does not cover.
    pub fn color_for(&self, token_type: &TokenType) -> Color {
        self.token_colors
            .get(token_type)
            .copied()
            .unwrap_or(Color::white(1.0))
    }

    /// Resolve a built-in theme by name.
    pub fn named(name: &str) -> Option<Theme> {
        match name {
            "sundells-colors" => Some(Theme::sundells_colors()),
            "midnight" => Some(Theme::midnight()),
            "wwdc17" => Some(Theme::wwdc17()),
            "wwdc18" => Some(Theme::wwdc18()),
            _ => None,
        }
    }

    /// The names of all built-in themes.
    pub fn builtin_names() -> &'static [&'static str] {
        &["sundells-colors", "midnight", "wwdc17", "wwdc18"]
    }

    /// Load a theme from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|error| ThemeError::Io(error.to_string()))?;
        serde_yaml::from_str(&contents).map_err(|error| ThemeError::Parse(error.to_string()))
    }

    /// Resolve a built-in theme name, or fall back to loading `name` as a
    /// YAML file path.
    pub fn resolve(name: &str) -> Result<Theme, ThemeError> {
        if let Some(theme) = Theme::named(name) {
            return Ok(theme);
        }

        if Path::new(name).exists() {
            return Theme::from_file(name);
        }

        Err(ThemeError::UnknownTheme(name.to_string()))
    }

    /// A theme matching the "Sundell's Colors" Xcode theme.
    pub fn sundells_colors() -> Theme {
        Theme {
            plain_text_color: Color::new(0.66, 0.74, 0.74),
            background_color: Color::new(0.098, 0.098, 0.098),
            token_colors: token_colors([
                (TokenType::Keyword, Color::new(0.91, 0.2, 0.54)),
                (TokenType::String, Color::new(0.98, 0.39, 0.12)),
                (TokenType::Type, Color::new(0.51, 0.51, 0.79)),
                (TokenType::Call, Color::new(0.2, 0.56, 0.9)),
                (TokenType::Number, Color::new(0.86, 0.44, 0.34)),
                (TokenType::Comment, Color::new(0.42, 0.54, 0.58)),
                (TokenType::Property, Color::new(0.13, 0.67, 0.62)),
                (TokenType::DotAccess, Color::new(0.57, 0.7, 0.0)),
                (TokenType::Preprocessing, Color::new(0.71, 0.54, 0.0)),
            ]),
        }
    }

    /// A theme matching Xcode's "Midnight" theme.
    pub fn midnight() -> Theme {
        Theme {
            plain_text_color: Color::white(1.0),
            background_color: Color::white(0.0),
            token_colors: token_colors([
                (TokenType::Keyword, Color::new(0.828, 0.095, 0.583)),
                (TokenType::String, Color::new(1.0, 0.171, 0.219)),
                (TokenType::Type, Color::new(0.137, 1.0, 0.512)),
                (TokenType::Call, Color::new(0.137, 1.0, 0.512)),
                (TokenType::Number, Color::new(0.469, 0.426, 1.0)),
                (TokenType::Comment, Color::new(0.255, 0.801, 0.27)),
                (TokenType::Property, Color::new(0.431, 0.714, 0.533)),
                (TokenType::DotAccess, Color::new(0.431, 0.714, 0.533)),
                (TokenType::Preprocessing, Color::new(0.896, 0.488, 0.284)),
            ]),
        }
    }

    /// A theme matching the colors used for the WWDC 2017 sample code.
    pub fn wwdc17() -> Theme {
        Theme {
            plain_text_color: Color::new(0.84, 0.84, 0.84),
            background_color: Color::new(0.18, 0.19, 0.2),
            token_colors: token_colors([
                (TokenType::Keyword, Color::new(0.992, 0.791, 0.45)),
                (TokenType::String, Color::new(0.966, 0.517, 0.29)),
                (TokenType::Type, Color::new(0.431, 0.714, 0.533)),
                (TokenType::Call, Color::new(0.431, 0.714, 0.533)),
                (TokenType::Number, Color::new(0.559, 0.504, 0.745)),
                (TokenType::Comment, Color::new(0.484, 0.483, 0.504)),
                (TokenType::Property, Color::new(0.431, 0.714, 0.533)),
                (TokenType::DotAccess, Color::new(0.431, 0.714, 0.533)),
                (TokenType::Preprocessing, Color::new(0.992, 0.791, 0.45)),
            ]),
        }
    }

    /// A theme matching the colors used for the WWDC 2018 sample code.
    pub fn wwdc18() -> Theme {
        Theme {
            plain_text_color: Color::white(1.0),
            background_color: Color::new(0.163, 0.163, 0.182),
            token_colors: token_colors([
                (TokenType::Keyword, Color::new(0.948, 0.14, 0.547)),
                (TokenType::String, Color::new(0.988, 0.273, 0.317)),
                (TokenType::Type, Color::new(0.584, 0.898, 0.361)),
                (TokenType::Call, Color::new(0.584, 0.898, 0.361)),
                (TokenType::Number, Color::new(0.587, 0.517, 0.974)),
                (TokenType::Comment, Color::new(0.424, 0.475, 0.529)),
                (TokenType::Property, Color::new(0.584, 0.898, 0.361)),
                (TokenType::DotAccess, Color::new(0.584, 0.898, 0.361)),
                (TokenType::Preprocessing, Color::new(0.952, 0.526, 0.229)),
            ]),
        }
    }
}

fn token_colors<const N: usize>(colors: [(TokenType, Color); N]) -> HashMap<TokenType, Color> {
    colors.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_themes_resolve() {
        for name in Theme::builtin_names() {
            assert!(Theme::named(name).is_some(), "missing theme: {name}");
        }
        assert!(Theme::named("nonexistent").is_none());
    }

    #[test]
    fn test_color_for_falls_back_to_white() {
        let theme = Theme::midnight();
        let color = theme.color_for(&TokenType::Custom("label".into()));
        assert_eq!(color, Color::white(1.0));
    }

    #[test]
    fn test_theme_round_trips_through_yaml() {
        let theme = Theme::wwdc18();
        let yaml = serde_yaml::to_string(&theme).expect("serialize");
        let parsed: Theme = serde_yaml::from_str(&yaml).expect("deserialize");

        assert_eq!(parsed.plain_text_color, theme.plain_text_color);
        assert_eq!(
            parsed.color_for(&TokenType::Keyword),
            theme.color_for(&TokenType::Keyword)
        );
    }
}
