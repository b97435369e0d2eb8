//! Browser entry point. Build with `trunk serve` (enables the `csr` feature).

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(portfolio::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    leptos::logging::log!(
        "portfolio renders in the browser only; run `trunk serve` to build with the `csr` feature"
    );
}
