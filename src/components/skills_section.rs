//! Technical skills grid with proficiency bars.

#[cfg(test)]
#[path = "skills_section_test.rs"]
mod skills_section_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, skill_icon_path};
use crate::state::theme::theme_palette;
use crate::state::ui::UiState;
use crate::util::scroll::Section;

/// Inline width for a proficiency bar; levels above 100 render full.
pub fn skill_bar_style(level: u8) -> String {
    format!("width: {}%;", level.min(100))
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let cards = content::SKILLS
        .iter()
        .map(|skill| {
            view! {
                <div class="card skill-card">
                    <Icon path=skill_icon_path(skill.icon) class="icon icon--xl skill-card__icon"/>
                    <h3 class="skill-card__name">{skill.name}</h3>
                    <div
                        class="skill-card__bar"
                        role="progressbar"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow=skill.level.to_string()
                    >
                        <div class="skill-card__fill" style=skill_bar_style(skill.level)></div>
                    </div>
                    <span class="skill-card__level">{format!("{}%", skill.level)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Skills.id() class=move || theme_palette(ui.get().theme).band_alt>
            <div class="container">
                <h2 class="section-title">"Technical Skills"</h2>
                <div class="grid grid--4">{cards}</div>
            </div>
        </section>
    }
}
