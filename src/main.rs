//! Restaurant Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    _ = console_log::init_with_level(config.console_level());
    log::set_max_level(config.log_level);
    log::info!("[APP] Starting, API base {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
