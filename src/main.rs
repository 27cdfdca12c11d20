#![allow(warnings)]
//! Tag Group Demo Entry Point

mod app;
mod store;

use app::App;
use leptos::prelude::*;
use tag_group_ui::{logging, ProviderConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = match ProviderConfig::from_window() {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            web_sys::console::warn_1(&format!("[APP] Ignoring invalid config: {}", e).into());
            ProviderConfig::default()
        }
        None => ProviderConfig::default(),
    };
    if let Err(e) = logging::init(config.log_level()) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
