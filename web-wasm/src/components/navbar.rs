//! スクロール連動のナビゲーション
//!
//! - ナビバーの `scrolled`、トップへ戻るボタンの `visible`
//! - 表示中セクションに対応するナビリンクの `active`
//! - 同一ページ内リンクのスムーズスクロール

use crate::app::PageController;
use crate::components::reveal;
use crate::dom;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use portfolio_common::scroll::nav_link_matches;
use portfolio_common::{active_section, anchor_scroll_target, ScrollFlags, SectionBounds};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub fn bind(controller: &Rc<PageController>) {
    bind_scroll(controller);
    bind_anchor_links(controller);

    if let Some(button) = &controller.elements.scroll_top {
        EventListener::new(button, "click", |_| dom::smooth_scroll_to(0.0)).forget();
    }
}

/// スクロールイベントを1フレーム1回に間引く
fn bind_scroll(controller: &Rc<PageController>) {
    let ticking = Rc::new(Cell::new(false));
    // 発火済みのフレームは次のスクロールで置き換える（コールバック内では破棄しない）
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    let controller = controller.clone();
    EventListener::new(&gloo::utils::window(), "scroll", move |_| {
        if ticking.get() {
            return;
        }
        ticking.set(true);

        let controller = controller.clone();
        let ticking = ticking.clone();
        let handle = request_animation_frame(move |_| {
            handle_scroll(&controller);
            ticking.set(false);
        });
        *frame.borrow_mut() = Some(handle);
    })
    .forget();
}

fn handle_scroll(controller: &PageController) {
    let flags = ScrollFlags::at(dom::scroll_y());

    if let Some(navbar) = &controller.elements.navbar {
        dom::set_class(navbar, "scrolled", flags.navbar_scrolled);
    }
    if let Some(button) = &controller.elements.scroll_top {
        dom::set_class(button, "visible", flags.scroll_top_visible);
    }

    update_active_link();
    reveal::reveal_in_viewport();
}

fn update_active_link() {
    let sections: Vec<SectionBounds> = dom::query_all("section[id]")
        .iter()
        .map(|section| {
            let rect = section.get_bounding_client_rect();
            SectionBounds::new(
                section.id(),
                rect.top(),
                dom::offset_height(section).unwrap_or_else(|| rect.height()),
            )
        })
        .collect();

    let current = active_section(&sections).unwrap_or_default();

    for link in dom::query_all(".nav-links a[href^=\"#\"]") {
        let href = link.get_attribute("href").unwrap_or_default();
        let is_active = nav_link_matches(&href, current);
        dom::set_class(&link, "active", is_active);
    }
}

fn bind_anchor_links(controller: &Rc<PageController>) {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let controller = controller.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();

        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                scroll_to_anchor(&controller, &href);
            },
        )
        .forget();
    }
}

fn scroll_to_anchor(controller: &PageController, href: &str) {
    // "#" 単体などはセレクタとして不正なので何もしない
    let Ok(Some(target)) = gloo::utils::document().query_selector(href) else {
        return;
    };

    let navbar_height = controller.elements.navbar.as_ref().and_then(dom::offset_height);
    let top = anchor_scroll_target(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(),
        navbar_height,
    );
    dom::smooth_scroll_to(top);
}
