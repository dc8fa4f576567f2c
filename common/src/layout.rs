//! ページ挙動の定数
//!
//! スクロール閾値・ブレークポイント・タイミング・監視対象セレクタ

/// ナビバーに `scrolled` を付けるスクロール量(px)
pub const NAVBAR_SCROLLED_Y: f64 = 50.0;

/// トップへ戻るボタンを表示するスクロール量(px)
pub const SCROLL_TOP_VISIBLE_Y: f64 = 400.0;

/// アクティブセクション判定の基準線(px, ビューポート上端から)
pub const ACTIVE_SECTION_LINE: f64 = 200.0;

/// スクロール時のフェードイン判定で下端から差し引くマージン(px)
pub const SCROLL_REVEAL_MARGIN: f64 = 100.0;

/// IntersectionObserver の閾値
pub const OBSERVER_THRESHOLD: f64 = 0.1;

/// IntersectionObserver の rootMargin（下端50px）
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// これより広い画面幅ではモバイルメニューを閉じる(px)
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// ナビバーが無い場合のアンカースクロール補正(px)
pub const DEFAULT_NAVBAR_HEIGHT: f64 = 80.0;

/// セクション見出しのアニメーション遅延間隔(秒)
pub const HEADER_STAGGER_SECONDS: f64 = 0.2;

/// 問い合わせフォーム送信の擬似待ち時間(ms)
pub const FORM_SUBMIT_DELAY_MS: u32 = 2000;

/// 通知のスライドイン開始まで(ms)
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;

/// 通知の表示時間(ms)
pub const NOTIFICATION_DISPLAY_MS: u32 = 4000;

/// 通知のスライドアウト時間(ms)
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// 表示状態を示すクラス
pub const REVEAL_CLASS: &str = "fade-in-up";

/// IntersectionObserver で監視する要素
pub const OBSERVED_SELECTORS: &[&str] = &[
    ".section-header",
    ".experience-card",
    ".project-card",
    ".skill-category",
    ".stat",
    ".contact-item",
];

/// スクロールごとに表示判定する要素
pub const SCROLL_REVEAL_SELECTOR: &str = ".stat, .skill-category, .experience-card, .project-card";
