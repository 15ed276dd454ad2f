//! Colour theme preference.

/// User theme preference. `System` follows `prefers-color-scheme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Parse a stored preference; unknown values fall back to `System`.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => Theme::System,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Whether the page should render dark, given the OS preference.
    pub fn is_dark(&self, prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => prefers_dark,
        }
    }

    /// Explicit preference opposite to what is currently shown.
    pub fn toggled(&self, prefers_dark: bool) -> Self {
        if self.is_dark(prefers_dark) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}
