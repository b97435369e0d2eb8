//! Fixed top navigation: brand, theme toggle, section links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<UiState>` provided by the home page. The toggle persists
//! through `util::dark_mode` and then writes the new theme back to the
//! signal; every themed class on the page follows from that write.

use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::state::theme::theme_palette;
use crate::state::ui::UiState;
use crate::util::scroll::{Section, scroll_to};
use crate::util::storage::BrowserStore;

/// Top navigation bar for the home page.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let palette = move || theme_palette(ui.get().theme);

    let links = Section::NAV
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="nav__link"
                    aria-label=format!("Go to {}", section.label())
                    on:click=move |_| scroll_to(section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || palette().nav>
            <div class="nav__inner">
                <span class="nav__brand">{content::site::OWNER_NAME}</span>
                <div class="nav__actions">
                    <button
                        class="nav__theme-toggle"
                        aria-label=move || palette().toggle_label
                        title=move || palette().toggle_label
                        on:click=move |_| {
                            let current = ui.get().theme;
                            let next = crate::util::dark_mode::toggle(&BrowserStore, current);
                            ui.update(|u| u.theme = next);
                        }
                    >
                        <Show
                            when=move || ui.get().theme.is_dark()
                            fallback=|| view! { <Icon path=icons::MOON/> }
                        >
                            <Icon path=icons::SUN/>
                        </Show>
                    </button>
                    <div class="nav__links">{links}</div>
                </div>
            </div>
        </nav>
    }
}
