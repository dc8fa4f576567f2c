//! 問い合わせフォーム
//!
//! 送信先は未定のため、一定時間待って成功通知を出しフォームをリセットする。

use crate::app::PageController;
use crate::components::notification;
use crate::dom;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use portfolio_common::form::MSG_SUCCESS;
use portfolio_common::layout::FORM_SUBMIT_DELAY_MS;
use portfolio_common::{ContactSubmission, FormPhase, Notification};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

pub fn bind(controller: &Rc<PageController>) {
    let Some(form) = controller
        .elements
        .contact_form
        .clone()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let target = form.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            submit(&target);
        },
    )
    .forget();
}

fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactSubmission::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactSubmission::new(field("name"), field("email"), field("message"))
}

pub fn submit(form: &HtmlFormElement) {
    if let Err(err) = read_submission(form).validate() {
        // 入力内容はそのまま残す
        notification::show(&Notification::error(err.message()));
        return;
    }

    set_phase(form, FormPhase::Sending);

    let form = form.clone();
    Timeout::new(FORM_SUBMIT_DELAY_MS, move || {
        set_phase(&form, FormPhase::Idle);
        notification::show(&Notification::success(MSG_SUCCESS));
        form.reset();
    })
    .forget();
}

fn set_phase(form: &HtmlFormElement, phase: FormPhase) {
    let Some(button) = form
        .query_selector(".btn-form")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };

    button.set_disabled(phase.button_disabled());
    button.set_inner_html(phase.button_html());
    dom::set_class(&button, "loading", phase == FormPhase::Sending);
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn form(name: &str, email: &str, message: &str) -> HtmlFormElement {
        let document = gloo::utils::document();
        let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
        form.set_inner_html(&format!(
            r#"<input name="name" value="{}"><input name="email" value="{}">
               <textarea name="message">{}</textarea>
               <button type="submit" class="btn-form">Send Message</button>"#,
            name, email, message
        ));
        document.body().unwrap().append_child(&form).unwrap();
        form
    }

    fn button(form: &HtmlFormElement) -> HtmlButtonElement {
        form.query_selector(".btn-form").unwrap().unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn wasm_valid_submission_enters_loading_state() {
        let form = form("Ada", "ada@example.com", "Hello");
        submit(&form);

        let button = button(&form);
        assert!(button.disabled());
        assert!(dom::has_class(&button, "loading"));
    }

    #[wasm_bindgen_test]
    fn wasm_missing_field_shows_error_without_loading() {
        let form = form("Ada", "", "Hello");
        submit(&form);

        let button = button(&form);
        assert!(!button.disabled());
        assert!(!dom::has_class(&button, "loading"));
        assert!(!dom::query_all(".notification-error").is_empty());
    }

    /// 待機後に成功通知が出て、入力欄が空に戻る
    #[wasm_bindgen_test]
    async fn wasm_valid_submission_resets_after_delay() {
        use gloo_timers::future::TimeoutFuture;
        use web_sys::{HtmlInputElement, HtmlTextAreaElement};

        // reset() は value 属性に戻すため、入力はプロパティで与える
        let form = form("", "", "");
        let input = |name: &str| -> HtmlInputElement {
            form.query_selector(&format!("input[name={}]", name))
                .unwrap()
                .unwrap()
                .dyn_into()
                .unwrap()
        };
        let message: HtmlTextAreaElement = form
            .query_selector("textarea[name=message]")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        input("name").set_value("Ada");
        input("email").set_value("ada@example.com");
        message.set_value("Hello");

        submit(&form);
        assert!(button(&form).disabled());

        TimeoutFuture::new(FORM_SUBMIT_DELAY_MS + 200).await;

        let success = dom::query_all(".notification-success");
        assert!(success.iter().any(|el| el.text_content().unwrap_or_default().contains(MSG_SUCCESS)));
        assert_eq!(input("name").value(), "");
        assert_eq!(input("email").value(), "");
        assert_eq!(message.value(), "");

        let button = button(&form);
        assert!(!button.disabled());
        assert!(!dom::has_class(&button, "loading"));
        assert_eq!(button.inner_html(), "Send Message");
    }
}
