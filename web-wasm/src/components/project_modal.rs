//! プロジェクト詳細モーダル

use crate::app::PageController;
use crate::dom;
use gloo::events::{EventListener, EventListenerOptions};
use portfolio_common::render_project;
use std::rc::Rc;

const ACTIVE_CLASS: &str = "active";

/// 識別子のプロジェクトを表示（見つからなければ何もしない）
pub fn open(controller: &PageController, project_id: &str) {
    let (Some(modal), Some(body)) = (&controller.elements.modal, &controller.elements.modal_body) else {
        return;
    };

    let (next, project) = controller.modal.borrow().open(project_id, &controller.catalog);
    let Some(project) = project else {
        return;
    };

    body.set_inner_html(&render_project(project));
    dom::set_class(modal, ACTIVE_CLASS, true);
    dom::set_scroll_lock(true);
    *controller.modal.borrow_mut() = next;
}

pub fn close(controller: &PageController) {
    let Some(modal) = &controller.elements.modal else {
        return;
    };

    let next = controller.modal.borrow().close();
    dom::set_class(modal, ACTIVE_CLASS, false);
    dom::set_scroll_lock(false);
    *controller.modal.borrow_mut() = next;
}

pub fn bind(controller: &Rc<PageController>) {
    for button in dom::query_all(".btn-read-more") {
        let c = controller.clone();
        let trigger = button.clone();
        EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let project_id = trigger
                    .closest(".project-card")
                    .ok()
                    .flatten()
                    .and_then(|card| card.get_attribute("data-project"));
                if let Some(id) = project_id {
                    open(&c, &id);
                }
            },
        )
        .forget();
    }

    for trigger in [&controller.elements.modal_close, &controller.elements.modal_overlay]
        .into_iter()
        .flatten()
    {
        let c = controller.clone();
        EventListener::new(trigger, "click", move |_| close(&c)).forget();
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::app::PageElements;
    use portfolio_common::{ModalState, ProjectCatalog};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn controller() -> Rc<PageController> {
        let document = gloo::utils::document();
        let elements = PageElements {
            modal: document.create_element("div").ok(),
            modal_body: document.create_element("div").ok(),
            ..Default::default()
        };
        PageController::new(elements, ProjectCatalog::builtin())
    }

    #[wasm_bindgen_test]
    fn wasm_open_known_project() {
        let c = controller();
        open(&c, "upec");

        let body = c.elements.modal_body.clone().unwrap();
        assert!(body.inner_html().contains("UPEC: A Multi-Modal AI-Powered Device"));
        assert!(dom::has_class(c.elements.modal.as_ref().unwrap(), "active"));
        assert!(c.modal.borrow().is_open());

        close(&c);
        assert_eq!(*c.modal.borrow(), ModalState::Closed);
        assert!(!dom::has_class(c.elements.modal.as_ref().unwrap(), "active"));
    }

    #[wasm_bindgen_test]
    fn wasm_open_unknown_project_leaves_dom_untouched() {
        let c = controller();
        open(&c, "does-not-exist");

        assert_eq!(c.elements.modal_body.as_ref().unwrap().inner_html(), "");
        assert!(!dom::has_class(c.elements.modal.as_ref().unwrap(), "active"));
        assert_eq!(*c.modal.borrow(), ModalState::Closed);
    }
}
