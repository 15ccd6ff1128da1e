//! Moving Inventory Frontend Entry Point

mod models;
mod error;
mod config;
mod inventory;
mod feedback;
mod estimate;
mod tips;
mod controller;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
