use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_dark_and_hidden() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.revealed());
}

#[test]
fn with_theme_keeps_hero_hidden() {
    let state = UiState::with_theme(Theme::Light);
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.revealed());
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveal_is_one_shot_and_idempotent() {
    let mut state = UiState::default();
    state.reveal();
    state.reveal();
    assert!(state.revealed());
}

#[test]
fn theme_changes_do_not_hide_revealed_hero() {
    let mut state = UiState::default();
    state.reveal();
    state.theme = state.theme.toggled();
    assert!(state.revealed());
}

#[test]
fn hero_class_tracks_reveal_flag() {
    assert_eq!(hero_reveal_class(false), "hero__content is-hidden");
    assert_eq!(hero_reveal_class(true), "hero__content is-visible");
}
