//! Full-height introduction block.
//!
//! SYSTEM CONTEXT
//! ==============
//! First section of the home page. Its content fades in once the page flips
//! `UiState::revealed` after mount.

use content::site;
use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::components::profile_image::ProfileImage;
use crate::components::tooltip::Tooltip;
use crate::state::theme::theme_palette;
use crate::state::ui::{UiState, hero_reveal_class};
use crate::util::scroll::{Section, scroll_to};

/// Hero section: portrait, name, tagline, calls to action, social links.
#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let profile = content::PROFILE;

    view! {
        <section id=Section::Hero.id() class="hero">
            <div class=move || hero_reveal_class(ui.get().revealed())>
                <div class=move || theme_palette(ui.get().theme).avatar_ring>
                    <ProfileImage
                        src=site::PROFILE_IMAGE
                        fallback=site::PLACEHOLDER_IMAGE
                        alt=profile.name
                    />
                </div>

                <h1 class="hero__name">{profile.name}</h1>
                <p class="hero__tagline">{profile.tagline}</p>
                <p class="hero__subtitle">{profile.subtitle}</p>

                <div class="hero__actions">
                    <button
                        class="btn btn--teal"
                        aria-label="View my projects"
                        on:click=move |_| scroll_to(Section::Projects)
                    >
                        "🚀 View My Work"
                    </button>
                    <button
                        class="btn btn--violet"
                        aria-label="Get in touch"
                        on:click=move |_| scroll_to(Section::Contact)
                    >
                        "💬 Get In Touch"
                    </button>
                    <a
                        class="btn btn--outline"
                        href=site::RESUME_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Download resume PDF"
                    >
                        <Icon path=icons::DOWNLOAD/>
                        "My Resume"
                    </a>
                </div>

                <div class="hero__social">
                    <Tooltip id="linkedin" label="LinkedIn">
                        <a
                            class="hero__social-link"
                            href=profile.linkedin_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=format!("LinkedIn profile of {}", profile.name)
                        >
                            <Icon path=icons::LINKEDIN class="icon icon--lg"/>
                        </a>
                    </Tooltip>
                    <Tooltip id="github" label="GitHub">
                        <a
                            class="hero__social-link"
                            href=profile.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=format!("GitHub profile of {}", profile.name)
                        >
                            <Icon path=icons::GITHUB class="icon icon--lg"/>
                        </a>
                    </Tooltip>
                    <Tooltip id="email" label="Email">
                        <a
                            class="hero__social-link"
                            href=profile.mailto()
                            aria-label=format!("Send an email to {}", profile.name)
                        >
                            <Icon path=icons::MAIL class="icon icon--lg"/>
                        </a>
                    </Tooltip>
                </div>
            </div>

            <div class="hero__scroll-hint" aria-hidden="true">
                <Icon path=icons::CHEVRON_DOWN class="icon icon--lg"/>
            </div>
        </section>
    }
}
