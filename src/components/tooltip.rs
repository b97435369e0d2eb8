//! Hover/focus tooltip wrapper.

use leptos::prelude::*;

use crate::state::tooltip::TooltipState;

/// Wraps `children` and shows `label` while the pointer or keyboard focus is
/// inside. Only one tooltip is visible page-wide.
#[component]
pub fn Tooltip(id: &'static str, label: &'static str, children: Children) -> impl IntoView {
    let tooltips = expect_context::<RwSignal<TooltipState>>();

    view! {
        <span
            class="tooltip-anchor"
            on:mouseenter=move |_| tooltips.update(|t| t.show(id))
            on:mouseleave=move |_| tooltips.update(|t| t.hide(id))
            on:focusin=move |_| tooltips.update(|t| t.show(id))
            on:focusout=move |_| tooltips.update(|t| t.hide(id))
        >
            {children()}
            <Show when=move || tooltips.with(|t| t.is_visible(id))>
                <span class="tooltip" role="tooltip">
                    {label}
                </span>
            </Show>
        </span>
    }
}
