#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Light/dark visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Returned when a stored theme string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// Literal persisted in storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Class names and labels the page derives from the active theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    /// Root page wrapper.
    pub shell: &'static str,
    /// Fixed navigation bar.
    pub nav: &'static str,
    /// Sections on the primary band (about, projects, contact).
    pub band_primary: &'static str,
    /// Sections on the alternate band (skills, certifications).
    pub band_alt: &'static str,
    /// Ring around the hero profile picture.
    pub avatar_ring: &'static str,
    /// Accessible label for the toggle button.
    pub toggle_label: &'static str,
}

/// Map a theme to the style descriptor used across the page.
#[must_use]
pub fn theme_palette(theme: Theme) -> ThemePalette {
    match theme {
        Theme::Dark => ThemePalette {
            shell: "page page--dark",
            nav: "nav nav--dark",
            band_primary: "band band--dark-primary",
            band_alt: "band band--dark-alt",
            avatar_ring: "avatar avatar--dark",
            toggle_label: "Switch to light theme",
        },
        Theme::Light => ThemePalette {
            shell: "page page--light",
            nav: "nav nav--light",
            band_primary: "band band--light-primary",
            band_alt: "band band--light-alt",
            avatar_ring: "avatar avatar--light",
            toggle_label: "Switch to dark theme",
        },
    }
}
