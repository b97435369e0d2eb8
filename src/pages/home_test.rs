#![cfg(feature = "ssr")]

use content::site;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::app::provide_app_state;
use crate::util::scroll::Section;

fn render_home() -> String {
    Owner::new().with(|| {
        provide_app_state();
        view! { <HomePage/> }.to_html()
    })
}

fn position_of(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` missing from rendered page"))
}

// =============================================================
// Layout
// =============================================================

#[test]
fn sections_render_in_page_order() {
    let html = render_home();
    let positions: Vec<usize> = Section::ORDER
        .iter()
        .map(|section| position_of(&html, &format!("id=\"{}\"", section.id())))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn first_paint_uses_dark_palette_and_hidden_hero() {
    let html = render_home();
    assert!(html.contains("page page--dark"));
    assert!(html.contains("hero__content is-hidden"));
    assert!(html.contains("Switch to light theme"));
}

#[test]
fn nav_offers_every_navigable_section() {
    let html = render_home();
    for section in Section::NAV {
        assert!(html.contains(section.label()), "missing nav entry {section:?}");
    }
}

// =============================================================
// Hero
// =============================================================

#[test]
fn hero_shows_owner_and_resume_link() {
    let html = render_home();
    let heading = &html[position_of(&html, "hero__name")..];
    assert!(heading.starts_with("hero__name\">Hari Prasad Chinimilli"));
    assert!(html.contains(site::RESUME_PATH));
    assert!(html.contains(site::PROFILE_IMAGE));
}

// =============================================================
// Certifications
// =============================================================

#[test]
fn carousel_starts_on_first_card() {
    let html = render_home();
    assert_eq!(html.matches("cert-card is-active").count(), 1);
    assert!(html.contains("transform: translateX(-0%);"));
    assert!(html.contains("TSPIN24_590120"));
}

#[test]
fn carousel_cards_are_staggered() {
    let html = render_home();
    assert!(html.contains("animation-delay: 0ms;"));
    assert!(html.contains("animation-delay: 150ms;"));
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn contact_form_posts_to_relay_in_new_tab() {
    let html = render_home();
    let form = &html[position_of(&html, "<form")..];
    assert!(form.contains(&format!("action=\"{}\"", site::FORM_RELAY_URL)));
    assert!(form.contains("method=\"POST\""));
    assert!(form.contains("target=\"_blank\""));
}

#[test]
fn contact_form_requires_all_fields_and_disables_captcha() {
    let html = render_home();
    let start = position_of(&html, "<form");
    let end = start + position_of(&html[start..], "</form>");
    let form = &html[start..end];
    assert_eq!(form.matches("required").count(), 4);
    assert!(form.contains("name=\"_captcha\""));
    assert!(form.contains("value=\"false\""));
}
