mod app;
mod components;
mod logging;
mod models;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = logging::setup_logging() {
        web_sys::console::warn_1(&format!("Warning: Failed to setup logging: {e}").into());
    }

    tracing::info!("Starting Showroom site");
    leptos::mount::mount_to_body(App);
}
