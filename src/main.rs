//! Render Scan Demo Page Entry Point

mod config;
mod tasks;
mod store;
mod clipboard;
mod components;
mod app;

use app::App;
use config::DemoConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = DemoConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger already set: {}", e).into());
    }

    let mount_id = config.mount_id;
    let app = move || {
        provide_context(config);
        view! { <App /> }
    };

    match mount_target(mount_id) {
        Some(target) => leptos::mount::mount_to(target, app).forget(),
        None => {
            log::warn!("[APP] #{} not found, mounting to body", mount_id);
            mount_to_body(app);
        }
    }
}

/// Host element the page mounts into
fn mount_target(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
