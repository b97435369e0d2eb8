//! Certification carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the certifications section. The cursor lives in a local
//! signal; the track offset, active card and dot highlight are all derived
//! from it through the pure helpers in `state::carousel`.
//!
//! TRADE-OFFS
//! ==========
//! Paging is button and dot driven only. There is no swipe or autoplay.

use content::{CertSummary, Certification};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icons::{self, Icon};
use crate::state::carousel::{CarouselCursor, card_class, card_style, track_style};

/// Horizontally paged list of certification cards.
#[component]
pub fn CertCarousel(certifications: &'static [Certification]) -> impl IntoView {
    let cursor = RwSignal::new(CarouselCursor::new(certifications.len()));

    let cards = certifications
        .iter()
        .enumerate()
        .map(|(position, cert)| {
            view! {
                <div
                    class=move || card_class(&cursor.get(), position)
                    style=card_style(position)
                >
                    <CertCard cert=*cert/>
                </div>
            }
        })
        .collect_view();

    let dots = move || {
        (0..certifications.len())
            .map(|position| {
                view! {
                    <button
                        class=move || {
                            if cursor.get().is_active(position) {
                                "carousel__dot is-active"
                            } else {
                                "carousel__dot"
                            }
                        }
                        aria-label=format!("Show certification {}", position + 1)
                        on:click=move |_| cursor.update(|c| c.go_to(position))
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="carousel">
            <div class="carousel__viewport">
                <div class="carousel__track" style=move || track_style(cursor.get().index())>
                    {cards}
                </div>
            </div>
            <Show when=move || cursor.get().is_pageable()>
                <div class="carousel__controls">
                    <button
                        class="carousel__arrow"
                        aria-label="Previous certification"
                        on:click=move |_| cursor.update(CarouselCursor::prev)
                    >
                        <Icon path=icons::CHEVRON_LEFT/>
                    </button>
                    <div class="carousel__dots">{dots}</div>
                    <button
                        class="carousel__arrow"
                        aria-label="Next certification"
                        on:click=move |_| cursor.update(CarouselCursor::next)
                    >
                        <Icon path=icons::CHEVRON_RIGHT/>
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CertCard(cert: Certification) -> impl IntoView {
    let summary = match cert.summary {
        CertSummary::Description(text) => {
            view! { <p class="cert-card__description">{text}</p> }.into_any()
        }
        CertSummary::Details(items) => view! {
            <ul class="cert-card__details">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <article class="card cert-card__body">
            <div class="cert-card__header">
                <Icon path=icons::AWARD class="icon icon--lg cert-card__icon"/>
                <div>
                    <h3 class="cert-card__title">{cert.title}</h3>
                    <p class="cert-card__issuer">{cert.issuer}</p>
                    <p class="cert-card__date">{cert.date}</p>
                </div>
            </div>
            {summary}
            {cert
                .student_id
                .map(|id| {
                    view! {
                        <p class="cert-card__meta">
                            <b>"AICTE Student ID:"</b>
                            " "
                            {id}
                        </p>
                    }
                })}
            {cert
                .certificate_id
                .map(|id| {
                    view! {
                        <p class="cert-card__meta">
                            <b>"Certificate ID:"</b>
                            " "
                            {id}
                        </p>
                    }
                })}
        </article>
    }
}
