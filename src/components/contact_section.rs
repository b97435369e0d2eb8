//! Contact details and the message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is a plain HTML form posting to an external relay in a new tab.
//! The browser enforces the required fields; the submit handler only queues
//! a toast and never cancels the native submission.

use content::site;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icons::{self, Icon};
use crate::components::toaster::notify;
use crate::state::theme::theme_palette;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::scroll::Section;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let profile = content::PROFILE;

    view! {
        <section id=Section::Contact.id() class=move || theme_palette(ui.get().theme).band_primary>
            <div class="container container--narrow">
                <h2 class="section-title">"Let's Connect"</h2>
                <div class="contact__grid">
                    <div class="contact__details">
                        <h3 class="contact__heading">"Get In Touch"</h3>
                        <p class="contact__intro">
                            "I'm always open to discussing new opportunities, collaborations, or just having a chat about technology and innovation."
                        </p>
                        <ul class="contact__list">
                            <ContactRow
                                icon=icons::MAIL
                                href=Some(profile.mailto())
                                label=profile.email
                            />
                            <ContactRow icon=icons::PHONE href=Some(profile.tel()) label=profile.phone/>
                            <ContactRow icon=icons::MAP_PIN href=None label=profile.location/>
                            <ContactRow
                                icon=icons::LINKEDIN
                                href=Some(profile.linkedin_url.to_owned())
                                label=profile.linkedin_label
                            />
                            <ContactRow
                                icon=icons::GITHUB
                                href=Some(profile.github_url.to_owned())
                                label=profile.github_label
                            />
                        </ul>
                    </div>
                    <div class="card contact__form-card">
                        <ContactForm/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(icon: &'static str, href: Option<String>, label: &'static str) -> impl IntoView {
    let external = href.as_deref().is_some_and(|h| h.starts_with("http"));
    view! {
        <li class="contact__row">
            <Icon path=icon class="icon contact__icon"/>
            {match href {
                Some(href) if external => {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer">
                            {label}
                        </a>
                    }
                        .into_any()
                }
                Some(href) => view! { <a href=href>{label}</a> }.into_any(),
                None => view! { <span>{label}</span> }.into_any(),
            }}
        </li>
    }
}

/// Relay-backed message form: name, email, subject, message.
#[component]
pub fn ContactForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |_: leptos::ev::SubmitEvent| {
        // Only reached once native validation has passed.
        notify(toasts, "Opening the message relay in a new tab.", ToastKind::Success);
    };

    view! {
        <form
            class="contact-form"
            method="POST"
            action=site::FORM_RELAY_URL
            target="_blank"
            on:submit=on_submit
        >
            <input class="input" type="text" name="name" placeholder="Your Name" required/>
            <input class="input" type="email" name="email" placeholder="Your Email" required/>
            <input class="input" type="text" name="subject" placeholder="Subject" required/>
            <textarea
                class="input"
                name="message"
                placeholder="Your Message"
                rows="4"
                required
            ></textarea>
            <input type="hidden" name="_captcha" value="false"/>
            <button type="submit" class="btn btn--block">
                "Send Message"
            </button>
        </form>
    }
}
