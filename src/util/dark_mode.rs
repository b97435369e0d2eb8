//! Theme initialization, application, and toggle.
//!
//! Reads the persisted preference through a [`PreferenceStore`] and applies
//! the `dark` class to `<html>` and `<body>`. Every apply writes the active
//! theme back under [`THEME_STORAGE_KEY`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: unreadable or unrecognized values fall back to
//! the dark default, failed writes are logged and otherwise ignored. Outside
//! `csr` the document side is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use content::site::THEME_STORAGE_KEY;

use crate::state::theme::Theme;
use crate::util::storage::PreferenceStore;

/// Class marking dark mode on the document element and body.
pub const DARK_CLASS: &str = "dark";

/// Initial theme: the stored preference, or dark when absent or unusable.
pub fn read_preference(store: &impl PreferenceStore) -> Theme {
    match store.read(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
            leptos::logging::warn!("ignoring stored theme: {e}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            leptos::logging::warn!("theme preference unavailable: {e}");
            Theme::default()
        }
    }
}

/// Reflect `theme` on the document and persist it.
pub fn apply(store: &impl PreferenceStore, theme: Theme) {
    set_document_marker(theme.is_dark());
    if let Err(e) = store.write(THEME_STORAGE_KEY, theme.as_str()) {
        leptos::logging::warn!("failed to persist theme: {e}");
    }
}

/// Flip `current`, apply the result, and return it.
pub fn toggle(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(store, next);
    next
}

fn set_document_marker(dark: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = doc.document_element() {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, dark);
        }
        if let Some(body) = doc.body() {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, dark);
        }
        log::debug!("theme marker set: dark={dark}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = dark;
    }
}
