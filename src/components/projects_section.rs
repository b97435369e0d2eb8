use content::Project;
use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::state::theme::theme_palette;
use crate::state::ui::UiState;
use crate::util::scroll::Section;

/// Featured project cards linking out to their notebooks.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section id=Section::Projects.id() class=move || theme_palette(ui.get().theme).band_primary>
            <div class="container">
                <h2 class="section-title">"Featured Projects"</h2>
                <div class="grid grid--3">
                    {content::PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <img class="project-card__image" src=project.image alt=project.title loading="lazy"/>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tech">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="badge badge--outline">{*tech}</span> })
                        .collect_view()}
                </div>
                <a
                    class="btn btn--outline btn--small"
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=format!("Open the {} project", project.title)
                >
                    <Icon path=icons::EXTERNAL_LINK class="icon icon--sm"/>
                    "View Colab Project"
                </a>
            </div>
        </article>
    }
}
