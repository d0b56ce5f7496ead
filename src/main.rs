//! Far Away Frontend Entry Point

mod config;
mod models;
mod form;
mod storage;
mod ids;
mod packing_list;
mod sorting;
mod stats;
mod store;
mod context;
mod logger;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
