//! 問い合わせフォームの検証と送信状態

use lazy_static::lazy_static;
use regex::Regex;

pub const MSG_SUCCESS: &str = "Thank you for your message! I will get back to you soon.";
pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";

lazy_static! {
    // local@domain.tld 形式、空白なし
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// メールアドレスの簡易検証
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// フォーム検証エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl FormError {
    /// 通知に表示するメッセージ
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingFields => MSG_MISSING_FIELDS,
            FormError::InvalidEmail => MSG_INVALID_EMAIL,
        }
    }
}

/// フォームの入力内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// 必須項目 → メール形式の順に検証
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [&self.name, &self.email, &self.message];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        // 前後の空白も不正扱い
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// 送信ボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
}

impl FormPhase {
    pub fn button_disabled(self) -> bool {
        self == FormPhase::Sending
    }

    pub fn button_html(self) -> &'static str {
        match self {
            FormPhase::Idle => "Send Message",
            FormPhase::Sending => "<i class=\"fas fa-spinner fa-spin\"></i> Sending...",
        }
    }
}
