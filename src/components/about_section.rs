use leptos::prelude::*;

use crate::state::theme::theme_palette;
use crate::state::ui::UiState;
use crate::util::scroll::Section;

/// Biography paragraphs plus interest badges.
#[component]
pub fn AboutSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let profile = content::PROFILE;

    view! {
        <section id=Section::About.id() class=move || theme_palette(ui.get().theme).band_primary>
            <div class="container container--narrow">
                <h2 class="section-title">"About Me"</h2>
                <div class="card about__card">
                    {profile
                        .about
                        .iter()
                        .map(|paragraph| view! { <p class="about__paragraph">{*paragraph}</p> })
                        .collect_view()}
                    <div class="about__interests">
                        {profile
                            .interests
                            .iter()
                            .map(|interest| view! { <span class="badge">{*interest}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
