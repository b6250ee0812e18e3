//! Light/dark theme state machine.
//!
//! The page starts from the stored preference, or the OS color scheme when
//! nothing is stored. An explicit toggle always wins; OS changes only apply
//! while no preference is stored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button: it shows the mode a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    pub fn resolve(stored: Option<Theme>, os_prefers_dark: bool) -> Self {
        Self { theme: stored.unwrap_or_else(|| Theme::from_os(os_prefers_dark)) }
    }

    /// Flip the theme; returns the value the caller must persist.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.theme
    }

    /// Follow an OS scheme change unless the user has stored a preference.
    /// Returns whether the theme changed.
    pub fn follow_os(&mut self, stored: Option<Theme>, os_prefers_dark: bool) -> bool {
        if stored.is_some() {
            return false;
        }
        let next = Theme::from_os(os_prefers_dark);
        let changed = next != self.theme;
        self.theme = next;
        changed
    }
}
