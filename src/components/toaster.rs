//! Transient notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastState` is provided app-wide by `App`. Any component may call
//! [`notify`]; the [`Toaster`] mounted once at the root renders the queue.
//!
//! TRADE-OFFS
//! ==========
//! Auto-dismiss timeouts are fire-and-forget. A toast dismissed by hand
//! before its timeout leaves a timeout that finds nothing to remove.

use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast and schedule its removal after
/// [`TOAST_LIFETIME`](crate::state::toast::TOAST_LIFETIME).
pub fn notify(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let id = toasts.try_update(|t| t.push(message, kind));

    #[cfg(feature = "csr")]
    {
        if let Some(id) = id {
            let lifetime = crate::state::toast::TOAST_LIFETIME;
            let millis = u32::try_from(lifetime.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, move || {
                toasts.try_update(|t| t.dismiss(id));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Renders queued toasts, newest last.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                <Icon path=icons::CLOSE class="icon icon--sm"/>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
