//! スクロール位置から導出される表示状態
//!
//! DOMに依存しない純粋関数のみ。WASM側は測定値を渡して結果をクラスに反映する。

use crate::layout::{
    ACTIVE_SECTION_LINE, DEFAULT_NAVBAR_HEIGHT, HEADER_STAGGER_SECONDS, NAVBAR_SCROLLED_Y,
    SCROLL_REVEAL_MARGIN, SCROLL_TOP_VISIBLE_Y,
};

/// スクロール量に応じたフラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollFlags {
    /// ナビバーの `scrolled` クラス
    pub navbar_scrolled: bool,
    /// トップへ戻るボタンの `visible` クラス
    pub scroll_top_visible: bool,
}

impl ScrollFlags {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            navbar_scrolled: scroll_y > NAVBAR_SCROLLED_Y,
            scroll_top_visible: scroll_y > SCROLL_TOP_VISIBLE_Y,
        }
    }
}

/// セクションの位置（getBoundingClientRect().top と offsetHeight）
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn spans_reference_line(&self) -> bool {
        self.top <= ACTIVE_SECTION_LINE && self.top + self.height > ACTIVE_SECTION_LINE
    }
}

/// 基準線を跨いでいるセクションのID（複数あれば文書順で最後のもの）
pub fn active_section(sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.spans_reference_line())
        .map(|s| s.id.as_str())
}

/// `#id` 形式のリンクが指定セクションを指しているか
pub fn nav_link_matches(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#')
        .is_some_and(|id| !id.is_empty() && id == section_id)
}

/// スクロール時のフェードイン判定（ビューポート下端から100px内側まで）
pub fn in_reveal_zone(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height - SCROLL_REVEAL_MARGIN && bottom > 0.0
}

/// アンカーリンクのスクロール先（ナビバーの高さ分だけ手前）
///
/// # Arguments
/// * `target_top` - 対象要素の getBoundingClientRect().top
/// * `page_y` - 現在のスクロール量
/// * `navbar_height` - ナビバーの offsetHeight（無ければ80px）
pub fn anchor_scroll_target(target_top: f64, page_y: f64, navbar_height: Option<f64>) -> f64 {
    target_top + page_y - navbar_height.unwrap_or(DEFAULT_NAVBAR_HEIGHT)
}

/// セクション見出しの animation-delay（"0s", "0.2s", "0.4s", ...）
pub fn stagger_delay(index: usize) -> String {
    let seconds = index as f64 * HEADER_STAGGER_SECONDS;
    let rounded = (seconds * 10.0).round() / 10.0;
    format!("{}s", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_flags_thresholds() {
        assert_eq!(ScrollFlags::at(0.0), ScrollFlags::default());
        assert!(!ScrollFlags::at(50.0).navbar_scrolled);
        assert!(ScrollFlags::at(50.5).navbar_scrolled);
        assert!(!ScrollFlags::at(400.0).scroll_top_visible);
        assert!(ScrollFlags::at(401.0).scroll_top_visible);

        let mid = ScrollFlags::at(200.0);
        assert!(mid.navbar_scrolled);
        assert!(!mid.scroll_top_visible);
    }

    #[test]
    fn test_scroll_flags_all_offsets() {
        for y in (0..1000).map(|v| v as f64) {
            let flags = ScrollFlags::at(y);
            assert_eq!(flags.navbar_scrolled, y > 50.0);
            assert_eq!(flags.scroll_top_visible, y > 400.0);
        }
    }

    #[test]
    fn test_active_section() {
        let sections = vec![
            SectionBounds::new("home", -900.0, 800.0),
            SectionBounds::new("about", -100.0, 600.0),
            SectionBounds::new("projects", 500.0, 800.0),
        ];
        assert_eq!(active_section(&sections), Some("about"));
    }

    #[test]
    fn test_active_section_boundaries() {
        // top == 200 は含む、top + height == 200 は含まない
        let at_line = vec![SectionBounds::new("a", 200.0, 10.0)];
        assert_eq!(active_section(&at_line), Some("a"));

        let ends_at_line = vec![SectionBounds::new("a", 100.0, 100.0)];
        assert_eq!(active_section(&ends_at_line), None);
    }

    #[test]
    fn test_active_section_none() {
        let sections = vec![SectionBounds::new("contact", 300.0, 400.0)];
        assert_eq!(active_section(&sections), None);
        assert_eq!(active_section(&[]), None);
    }

    #[test]
    fn test_active_section_last_wins() {
        // 重なっている場合は後のセクション
        let sections = vec![
            SectionBounds::new("outer", 0.0, 1000.0),
            SectionBounds::new("inner", 150.0, 100.0),
        ];
        assert_eq!(active_section(&sections), Some("inner"));
    }

    #[test]
    fn test_nav_link_matches() {
        assert!(nav_link_matches("#about", "about"));
        assert!(!nav_link_matches("about", "about"));
        assert!(!nav_link_matches("#about-me", "about"));
        assert!(!nav_link_matches("#", ""));
    }

    #[test]
    fn test_nav_link_matches_ignores_bare_hash() {
        // idの無いセクションで "#" だけのリンクが光らない
        assert!(!nav_link_matches("#", ""));
        assert!(!nav_link_matches("", ""));
        assert!(!nav_link_matches("#top", ""));
    }

    #[test]
    fn test_in_reveal_zone() {
        assert!(in_reveal_zone(100.0, 300.0, 800.0));
        assert!(!in_reveal_zone(700.0, 900.0, 800.0)); // 下端100px以内
        assert!(in_reveal_zone(699.0, 900.0, 800.0));
        assert!(!in_reveal_zone(-500.0, 0.0, 800.0)); // 画面より上
    }

    #[test]
    fn test_anchor_scroll_target() {
        assert_eq!(anchor_scroll_target(300.0, 1000.0, Some(70.0)), 1230.0);
        assert_eq!(anchor_scroll_target(300.0, 1000.0, None), 1220.0);
        assert_eq!(anchor_scroll_target(-200.0, 500.0, Some(0.0)), 300.0);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "0s");
        assert_eq!(stagger_delay(1), "0.2s");
        assert_eq!(stagger_delay(3), "0.6s");
        assert_eq!(stagger_delay(5), "1s");
    }
}
