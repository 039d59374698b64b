//! Nested Table Frontend Entry Point

mod settings;
mod logging;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use settings::TableSettings;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = TableSettings::from_document();
    let settings = loaded.as_ref().ok().cloned().flatten().unwrap_or_default();
    logging::init(settings.level_filter());
    if let Err(err) = &loaded {
        log::warn!("[SETTINGS] Ignoring malformed settings: {}", err);
    }
    log::info!("[APP] Mounting nested table");

    mount_to_body(move || view! { <App settings=settings.clone() /> });
}
