use leptos::prelude::*;

use crate::state::image::ImageFallback;

/// Profile picture that swaps to `fallback` once if `src` fails to load.
#[component]
pub fn ProfileImage(
    src: &'static str,
    fallback: &'static str,
    alt: &'static str,
) -> impl IntoView {
    let image = RwSignal::new(ImageFallback::new(src, fallback));

    let on_error = move |_| {
        if image.try_update(ImageFallback::on_error).unwrap_or(false) {
            leptos::logging::warn!("profile image {src} failed to load, using {fallback}");
        }
    };

    view! {
        <img
            class="avatar__img"
            src=move || image.with(|i| i.src().to_owned())
            alt=alt
            on:error=on_error
        />
    }
}
