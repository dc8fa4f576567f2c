//! モバイルメニュー

use crate::app::PageController;
use crate::dom;
use gloo::events::EventListener;
use portfolio_common::MenuEvent;
use std::rc::Rc;

const ACTIVE_CLASS: &str = "active";

/// 状態を遷移させ、変化があればDOMに反映
pub fn apply(controller: &PageController, event: MenuEvent) {
    let (Some(button), Some(links)) = (&controller.elements.mobile_menu, &controller.elements.nav_links) else {
        return;
    };

    let current = controller.menu.get();
    let next = current.apply(event);
    if next == current {
        return;
    }

    controller.menu.set(next);
    dom::set_class(button, ACTIVE_CLASS, next.is_open());
    dom::set_class(links, ACTIVE_CLASS, next.is_open());
    dom::set_scroll_lock(next.is_open());
}

pub fn bind(controller: &Rc<PageController>) {
    if let Some(button) = &controller.elements.mobile_menu {
        let c = controller.clone();
        EventListener::new(button, "click", move |_| apply(&c, MenuEvent::Toggle)).forget();
    }

    if let Some(links) = &controller.elements.nav_links {
        for link in dom::query_all_in(links, "a") {
            let c = controller.clone();
            EventListener::new(&link, "click", move |_| apply(&c, MenuEvent::LinkClicked)).forget();
        }
    }

    let c = controller.clone();
    EventListener::new(&gloo::utils::window(), "resize", move |_| {
        apply(&c, MenuEvent::Resized { width: dom::viewport_width() });
    })
    .forget();
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::app::PageElements;
    use portfolio_common::{MenuState, ProjectCatalog};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(tag: &str) -> web_sys::Element {
        gloo::utils::document().create_element(tag).expect("要素作成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_toggle_and_link_click() {
        let elements = PageElements {
            mobile_menu: Some(element("button")),
            nav_links: Some(element("ul")),
            ..Default::default()
        };
        let controller = PageController::new(elements, ProjectCatalog::builtin());
        let button = controller.elements.mobile_menu.clone().unwrap();
        let links = controller.elements.nav_links.clone().unwrap();

        apply(&controller, MenuEvent::Toggle);
        assert_eq!(controller.menu.get(), MenuState::Open);
        assert!(dom::has_class(&button, "active"));
        assert!(dom::has_class(&links, "active"));

        apply(&controller, MenuEvent::LinkClicked);
        assert_eq!(controller.menu.get(), MenuState::Closed);
        assert!(!dom::has_class(&links, "active"));
    }

    #[wasm_bindgen_test]
    fn wasm_missing_elements_disable_menu() {
        let controller = PageController::new(PageElements::default(), ProjectCatalog::builtin());
        apply(&controller, MenuEvent::Toggle);
        assert_eq!(controller.menu.get(), MenuState::Closed);
    }
}
