//! Catch-all page for unknown paths.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;

#[component]
pub fn NotFoundPage(#[prop(into)] path: String) -> impl IntoView {
    let logged = path.clone();
    Effect::new(move || {
        leptos::logging::warn!("404: no route for {logged}");
    });

    view! {
        <main class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Oops! Page not found"</p>
            <p class="not-found__path">
                <code>{path}</code>
            </p>
            <a href="/" class="btn">
                "Return to Home"
            </a>
        </main>
    }
}
