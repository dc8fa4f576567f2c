//! モバイルメニューの状態遷移

use crate::layout::MOBILE_BREAKPOINT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// メニューに作用するイベント
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// ハンバーガーボタン
    Toggle,
    /// ナビリンクのクリック
    LinkClicked,
    /// Escapeキー（モーダルが開いていない場合のみ届く）
    Escape,
    /// ウィンドウのリサイズ
    Resized { width: f64 },
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkClicked) | (_, MenuEvent::Escape) => MenuState::Closed,
            (MenuState::Open, MenuEvent::Resized { width }) if width > MOBILE_BREAKPOINT => {
                MenuState::Closed
            }
            (state, MenuEvent::Resized { .. }) => state,
        }
    }
}
