//! 一時通知バナー
//!
//! 画面外に追加 → スライドイン → 表示時間後にスライドアウト → 削除

use crate::dom;
use gloo::timers::callback::Timeout;
use gloo::utils::document;
use portfolio_common::layout::{NOTIFICATION_DISPLAY_MS, NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS};
use portfolio_common::notification::{BANNER_STYLES, HIDDEN_TRANSFORM, SHOWN_TRANSFORM};
use portfolio_common::Notification;

pub fn show(notification: &Notification) {
    let document = document();
    let Some(body) = document.body() else {
        return;
    };
    let Ok(banner) = document.create_element("div") else {
        return;
    };

    banner.set_class_name(&notification.class_name());
    banner.set_inner_html(&notification.inner_html());
    for (property, value) in BANNER_STYLES {
        dom::set_style(&banner, property, value);
    }
    dom::set_style(&banner, "background", notification.kind.background());

    if body.append_child(&banner).is_err() {
        return;
    }

    let entering = banner.clone();
    Timeout::new(NOTIFICATION_ENTER_DELAY_MS, move || {
        dom::set_style(&entering, "transform", SHOWN_TRANSFORM);
    })
    .forget();

    Timeout::new(NOTIFICATION_DISPLAY_MS, move || {
        dom::set_style(&banner, "transform", HIDDEN_TRANSFORM);
        Timeout::new(NOTIFICATION_EXIT_MS, move || banner.remove()).forget();
    })
    .forget();
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_show_appends_banner() {
        show(&Notification::error("Please fill in all required fields."));

        let banners = dom::query_all(".notification.notification-error");
        assert!(!banners.is_empty());
        let last = banners.last().unwrap();
        assert!(last.inner_html().contains("Please fill in all required fields."));
    }
}
