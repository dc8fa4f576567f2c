//! 画像のフェードイン

use crate::dom;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

pub fn setup_image_fade() {
    for img in dom::query_all("img:not(.no-fade)") {
        // 読込済みの画像は load が来ないので触らない
        let loaded = img
            .dyn_ref::<HtmlImageElement>()
            .map(|i| i.complete() && i.natural_width() > 0)
            .unwrap_or(false);
        if loaded {
            continue;
        }

        let target = img.clone();
        EventListener::once(&img, "load", move |_| dom::set_style(&target, "opacity", "1")).forget();
        dom::set_style(&img, "opacity", "0");
        dom::set_style(&img, "transition", "opacity 0.3s ease");
    }
}
