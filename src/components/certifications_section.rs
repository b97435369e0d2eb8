use leptos::prelude::*;

use crate::components::cert_carousel::CertCarousel;
use crate::state::theme::theme_palette;
use crate::state::ui::UiState;
use crate::util::scroll::Section;

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section
            id=Section::Certifications.id()
            class=move || theme_palette(ui.get().theme).band_alt
        >
            <div class="container container--narrow">
                <h2 class="section-title">"Certifications"</h2>
                <CertCarousel certifications=content::CERTIFICATIONS/>
            </div>
        </section>
    }
}
