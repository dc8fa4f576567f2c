//! Portfolio page interaction controller (WASM)

mod app;
mod dom;
mod components;
mod api;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    // リスナーが controller を保持するので戻り値は捨ててよい
    let _controller = app::PageController::mount();
    components::images::setup_image_fade();
}
