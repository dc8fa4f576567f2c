//! DOM操作の小さなヘルパー
//!
//! 要素が無い・APIが失敗した場合は何もしない（機能が無効になるだけ）。

use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions};

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

#[cfg(test)]
pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn offset_height(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>().map(|html| html.offset_height() as f64)
}

/// ページ全体のスクロールを止める/戻す
pub fn set_scroll_lock(locked: bool) {
    if let Some(body) = document().body() {
        let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window().inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window().inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
