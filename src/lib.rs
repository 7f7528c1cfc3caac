pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;

/// Mounts the root view into the document body.
pub fn run_app() {
    yew::Renderer::<app::App>::new().render();
}
