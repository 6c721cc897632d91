use ratatui::style::Color;
use strum_macros::Display;

/// Palette selection, flipped with the theme key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label for the toggle control. Names the mode you would switch to,
    /// not the one you are in.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }

    /// Resolve a configured theme name. Anything that is not "dark"
    /// (case-insensitive) falls back to light.
    pub fn from_name(name: &str) -> Self {
        match name.eq_ignore_ascii_case("dark") {
            true => ThemeMode::Dark,
            false => ThemeMode::Light,
        }
    }
}

/// Resolved color palette for drawing.
#[derive(Debug, Clone)]
pub struct TuiTheme {
    pub background: Color,
    pub foreground: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub border: Color,
    pub accent: Color,
    pub muted: Color,
}

impl TuiTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            border: Color::DarkGray,
            accent: Color::Blue,
            muted: Color::DarkGray,
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            border: Color::Gray,
            accent: Color::Cyan,
            muted: Color::DarkGray,
        }
    }
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self::light()
    }
}
