//! Single-page portfolio.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns `RwSignal<UiState>` for the page lifetime and provides it to every
//! section. The stored theme preference is read once here, before the first
//! render, so the first paint already uses the right palette.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::bubble_trail::BubbleTrail;
use crate::components::certifications_section::CertificationsSection;
use crate::components::contact_section::ContactSection;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::projects_section::ProjectsSection;
use crate::components::skills_section::SkillsSection;
use crate::state::theme::theme_palette;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::storage::BrowserStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = RwSignal::new(UiState::with_theme(dark_mode::read_preference(&BrowserStore)));
    provide_context(ui);

    // Runs once after mount: sync the document marker, then start the hero fade.
    Effect::new(move || {
        dark_mode::apply(&BrowserStore, ui.get_untracked().theme);
        ui.update(UiState::reveal);
    });

    view! {
        <div class=move || theme_palette(ui.get().theme).shell>
            <BubbleTrail/>
            <NavBar/>
            <main>
                <Hero/>
                <AboutSection/>
                <SkillsSection/>
                <ProjectsSection/>
                <CertificationsSection/>
                <ContactSection/>
            </main>
        </div>
    }
}
