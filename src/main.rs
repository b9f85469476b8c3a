//! Portfolio Frontend Entry Point

mod actions;
mod alert;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod gallery;
mod models;
mod pages;
mod pagination;
mod routes;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger already initialized: {err}").into());
    }
    mount_to_body(App);
}
