//! Project Dashboard Frontend Entry Point

mod actions;
mod api;
mod app;
mod charts;
mod components;
mod config;
mod context;
mod error;
mod format;
mod forms;
mod loaders;
mod map;
mod models;
mod store;
mod tables;
mod tabs;
mod workload;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    mount_to_body(App);
}
