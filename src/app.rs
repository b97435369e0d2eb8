//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use content::site;
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{Meta, Script, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::toaster::Toaster;
use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::state::{toast::ToastState, tooltip::TooltipState};
use crate::util::structured_data::person_json_ld_script;

/// Pages the router can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    NotFound,
}

impl AppRoute {
    /// Path segment the home page is mounted at.
    pub const HOME_SEGMENT: &'static str = "";

    /// Map a location pathname to a route. Only `/` (or the empty path) is
    /// home; one trailing slash is ignored.
    #[must_use]
    pub fn resolve(pathname: &str) -> Self {
        let trimmed = pathname.strip_suffix('/').unwrap_or(pathname);
        if trimmed == Self::HOME_SEGMENT {
            Self::Home
        } else {
            Self::NotFound
        }
    }

    /// View for this route at `pathname`.
    pub fn view(self, pathname: String) -> AnyView {
        match self {
            Self::Home => view! { <HomePage/> }.into_any(),
            Self::NotFound => view! { <NotFoundPage path=pathname/> }.into_any(),
        }
    }
}

/// Page for the current `pathname`, re-resolved whenever it changes.
#[component]
pub fn RouteOutlet(#[prop(into)] pathname: Signal<String>) -> impl IntoView {
    move || {
        let pathname = pathname.get();
        AppRoute::resolve(&pathname).view(pathname)
    }
}

/// Provide the app-wide state contexts used below the router.
pub fn provide_app_state() {
    provide_context(RwSignal::new(TooltipState::default()));
    provide_context(RwSignal::new(ToastState::default()));
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_app_state();

    let json_ld = person_json_ld_script(&content::PROFILE, content::SKILLS);

    view! {
        <Title text=site::PAGE_TITLE/>
        <Meta name="description" content=site::PAGE_DESCRIPTION/>
        <Script type_="application/ld+json">{json_ld}</Script>

        <Router>
            <Routes fallback=|| view! { <RouteOutlet pathname=use_location().pathname/> }>
                <Route
                    path=StaticSegment(AppRoute::HOME_SEGMENT)
                    view=|| AppRoute::Home.view("/".to_owned())
                />
            </Routes>
        </Router>

        <Toaster/>
    }
}
