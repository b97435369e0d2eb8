#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::Theme;

/// View state owned by the home page: active theme and the hero fade-in.
///
/// Provided to child components as an `RwSignal<UiState>` context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    revealed: bool,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, revealed: false }
    }

    /// One-shot transition from hidden to visible. There is no way back.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

/// Class list for the hero block given the reveal flag.
#[must_use]
pub fn hero_reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "hero__content is-visible"
    } else {
        "hero__content is-hidden"
    }
}
