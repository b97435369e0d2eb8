use super::*;

// =============================================================
// Route resolution
// =============================================================

#[test]
fn root_paths_resolve_home() {
    assert_eq!(AppRoute::resolve("/"), AppRoute::Home);
    assert_eq!(AppRoute::resolve(""), AppRoute::Home);
}

#[test]
fn any_other_path_is_not_found() {
    assert_eq!(AppRoute::resolve("/about"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/index.html"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/projects/1"), AppRoute::NotFound);
}

#[test]
fn only_one_trailing_slash_is_ignored() {
    assert_eq!(AppRoute::resolve("//"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("///"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/about/"), AppRoute::NotFound);
}

// =============================================================
// Rendering
// =============================================================

#[cfg(feature = "ssr")]
fn render(pathname: &str) -> String {
    use leptos::tachys::view::RenderHtml;

    Owner::new().with(|| {
        provide_app_state();
        AppRoute::resolve(pathname).view(pathname.to_owned()).to_html()
    })
}

#[cfg(feature = "ssr")]
#[test]
fn home_route_renders_portfolio() {
    let html = render("/");
    assert!(html.contains("Hari Prasad Chinimilli"));
    assert!(!html.contains("not-found"));
}

#[cfg(feature = "ssr")]
#[test]
fn unknown_route_renders_not_found_page() {
    let html = render("/does-not-exist");
    assert!(html.contains("404"));
    assert!(html.contains("/does-not-exist"));
    assert!(!html.contains("id=\"contact\""));
}

#[cfg(feature = "ssr")]
#[test]
fn outlet_reads_current_pathname() {
    use leptos::tachys::view::RenderHtml;

    let html = Owner::new().with(|| {
        provide_app_state();
        let pathname = RwSignal::new("/first".to_owned());
        let outlet = view! { <RouteOutlet pathname=pathname/> };
        pathname.set("/second".to_owned());
        outlet.to_html()
    });
    assert!(html.contains("/second"));
    assert!(!html.contains("/first"));
}

// =============================================================
// Static assets
// =============================================================

#[test]
fn placeholder_image_ships_at_site_root() {
    let index = include_str!("../index.html");
    let file = site::PLACEHOLDER_IMAGE.trim_start_matches('/');
    assert!(index.contains(&format!("rel=\"copy-file\" href=\"public/{file}\"")));
    let on_disk = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public").join(file);
    assert!(on_disk.is_file(), "missing {}", on_disk.display());
}
