//! 画面右上に出る一時通知

use crate::html::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
            NotificationKind::Info => "fa-info-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "var(--success)",
            NotificationKind::Error => "#dc3545",
            NotificationKind::Info => "var(--primary)",
        }
    }
}

/// 画面外（右）に置いた状態
pub const HIDDEN_TRANSFORM: &str = "translateX(100%)";
/// 表示位置
pub const SHOWN_TRANSFORM: &str = "translateX(0)";

/// 通知要素の共通インラインスタイル
pub const BANNER_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "1rem 1.5rem"),
    ("border-radius", "var(--radius-lg)"),
    ("color", "white"),
    ("font-weight", "500"),
    ("z-index", "10000"),
    ("transform", HIDDEN_TRANSFORM),
    ("transition", "all 0.3s ease"),
    ("max-width", "400px"),
    ("box-shadow", "var(--shadow-heavy)"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "0.5rem"),
];

/// 通知内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }

    pub fn inner_html(&self) -> String {
        format!(
            "<i class=\"fas {}\"></i>\n<span>{}</span>",
            self.kind.icon_class(),
            escape_html(&self.message),
        )
    }
}
