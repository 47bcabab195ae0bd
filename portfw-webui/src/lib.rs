#![recursion_limit = "1024"]

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod store;
pub mod transport;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod http;
#[cfg(target_arch = "wasm32")]
mod pages;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    match config::ConsoleConfig::load() {
        Ok(config) => {
            yew::Renderer::<app::App>::with_props(app::Props { config }).render();
        }
        Err(err) => log::error!("cannot start console: {err}"),
    }
}
