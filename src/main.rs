#![allow(non_snake_case)]
mod app;
mod components;
mod pages;

use dioxus::logger::tracing::info;

fn main() {
    dioxus::logger::initialize_default();
    info!("starting foodgram web ui");
    dioxus::launch(app::app);
}
