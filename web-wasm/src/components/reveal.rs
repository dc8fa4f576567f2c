//! フェードイン表示
//!
//! 一度付けた表示クラスは外さない。

use crate::dom;
use portfolio_common::layout::{
    OBSERVED_SELECTORS, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD, REVEAL_CLASS, SCROLL_REVEAL_SELECTOR,
};
use portfolio_common::scroll::stagger_delay;
use portfolio_common::in_reveal_zone;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// 10%以上見えた要素に表示クラスを付け、以後は監視しない
pub fn observe() {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, REVEAL_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            gloo::console::warn!("IntersectionObserver を作成できません", e);
            return;
        }
    };
    callback.forget();

    for selector in OBSERVED_SELECTORS {
        for el in dom::query_all(selector) {
            observer.observe(&el);
        }
    }
}

/// スクロールのたびに、ビューポート内の要素へ表示クラスを付ける
pub fn reveal_in_viewport() {
    let viewport_height = dom::viewport_height();
    for el in dom::query_all(SCROLL_REVEAL_SELECTOR) {
        let rect = el.get_bounding_client_rect();
        if in_reveal_zone(rect.top(), rect.bottom(), viewport_height) {
            dom::set_class(&el, REVEAL_CLASS, true);
        }
    }
}

/// セクション見出しのアニメーション開始をずらす
pub fn stagger_headers() {
    for (index, header) in dom::query_all(".section-header").iter().enumerate() {
        dom::set_style(header, "animation-delay", &stagger_delay(index));
    }
}
