//! Plan-for-Today Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod list_state;
mod models;
mod pages;
mod session;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
