use crate::app::App;

mod api;
mod app;
mod card_grid;
mod components;
mod config;
mod top_sheet;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting places catalog");
    yew::Renderer::<App>::new().render();
}
