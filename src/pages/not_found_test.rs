#![cfg(feature = "ssr")]

use leptos::tachys::view::RenderHtml;

use super::*;

fn render(path: &str) -> String {
    let path = path.to_owned();
    Owner::new().with(|| view! { <NotFoundPage path=path/> }.to_html())
}

#[test]
fn shows_code_and_message() {
    let html = render("/missing");
    assert!(html.contains("404"));
    assert!(html.contains("Oops! Page not found"));
}

#[test]
fn echoes_requested_path_and_links_home() {
    let html = render("/missing");
    assert!(html.contains("/missing"));
    assert!(html.contains("href=\"/\""));
}
