//! ページ全体のコントローラ
//!
//! DOM参照・プロジェクトカタログ・メニュー/モーダルの状態を1つにまとめ、
//! 各コンポーネントの bind に渡す。

use crate::components::{author_stats, contact_form, mobile_menu, navbar, project_modal, reveal};
use crate::dom;
use gloo::events::EventListener;
use portfolio_common::{route_escape, EscapeTarget, MenuEvent, MenuState, ModalState, ProjectCatalog};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

/// ページに埋め込まれたカタログ `<script type="application/json">` のID
const PROJECT_DATA_ID: &str = "project-data";

/// コントローラが参照する要素（無いものは None）
#[derive(Clone, Default)]
pub struct PageElements {
    pub navbar: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub nav_links: Option<Element>,
    pub scroll_top: Option<Element>,
    pub modal: Option<Element>,
    pub modal_overlay: Option<Element>,
    pub modal_close: Option<Element>,
    pub modal_body: Option<Element>,
    pub contact_form: Option<Element>,
}

impl PageElements {
    pub fn lookup() -> Self {
        Self {
            navbar: dom::by_id("navbar"),
            mobile_menu: dom::by_id("mobile-menu"),
            nav_links: dom::by_id("nav-links"),
            scroll_top: dom::by_id("scrollTop"),
            modal: dom::by_id("projectModal"),
            modal_overlay: dom::by_id("modalOverlay"),
            modal_close: dom::by_id("modalClose"),
            modal_body: dom::by_id("modalBody"),
            contact_form: dom::by_id("contactForm"),
        }
    }
}

pub struct PageController {
    pub elements: PageElements,
    pub catalog: ProjectCatalog,
    pub menu: Cell<MenuState>,
    pub modal: RefCell<ModalState>,
}

impl PageController {
    pub fn new(elements: PageElements, catalog: ProjectCatalog) -> Rc<Self> {
        Rc::new(Self {
            elements,
            catalog,
            menu: Cell::new(MenuState::Closed),
            modal: RefCell::new(ModalState::Closed),
        })
    }

    /// 要素を探してすべての挙動を登録
    pub fn mount() -> Rc<Self> {
        let controller = Self::new(PageElements::lookup(), load_catalog());

        navbar::bind(&controller);
        mobile_menu::bind(&controller);
        project_modal::bind(&controller);
        contact_form::bind(&controller);
        bind_escape(&controller);

        reveal::observe();
        reveal::stagger_headers();
        author_stats::load();

        controller
    }
}

fn load_catalog() -> ProjectCatalog {
    let Some(script) = dom::by_id(PROJECT_DATA_ID) else {
        return ProjectCatalog::builtin();
    };

    let json = script.text_content().unwrap_or_default();
    match ProjectCatalog::from_json(&json) {
        Ok(catalog) => catalog,
        Err(e) => {
            gloo::console::warn!(format!("project-data を読み込めません: {}", e));
            ProjectCatalog::builtin()
        }
    }
}

/// Escapeキー: モーダルが開いていればモーダル、そうでなければメニューを閉じる
fn bind_escape(controller: &Rc<PageController>) {
    let controller = controller.clone();
    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() != "Escape" {
            return;
        }

        let target = route_escape(&controller.modal.borrow(), controller.menu.get());
        match target {
            EscapeTarget::Modal => project_modal::close(&controller),
            EscapeTarget::Menu => mobile_menu::apply(&controller, MenuEvent::Escape),
            EscapeTarget::Nothing => {}
        }
    })
    .forget();
}
