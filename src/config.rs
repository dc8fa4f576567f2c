use crate::error::{PortfolioError, Result};
use crate::metrics::SourceKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 引用数を取得するプロフィールページ
pub const DEFAULT_PROFILE_URL: &str = "https://scholar.google.com/citations?user=5fxhlsQAAAAJ&hl=en";

pub const ENV_PROFILE_URL: &str = "PORTFOLIO_PROFILE_URL";
pub const ENV_BROWSER_ENDPOINT: &str = "PORTFOLIO_BROWSER_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile_url: String,
    /// リモートChromiumのDevTools WebSocket（例: wss://chrome.browserless.io?token=...）
    pub browser_endpoint: Option<String>,
    pub source: SourceKind,
    pub timeout_seconds: u64,
    pub max_papers: usize,
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_url: DEFAULT_PROFILE_URL.into(),
            browser_endpoint: None,
            source: SourceKind::Browser,
            timeout_seconds: 30,
            max_papers: portfolio_common::scholar::DEFAULT_MAX_PAPERS,
            listen_addr: "127.0.0.1:8888".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio-site").join("config.json"))
    }

    pub fn effective_profile_url(&self) -> String {
        // 環境変数を優先
        match std::env::var(ENV_PROFILE_URL) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.profile_url.clone(),
        }
    }

    pub fn effective_browser_endpoint(&self) -> Result<String> {
        if let Ok(endpoint) = std::env::var(ENV_BROWSER_ENDPOINT) {
            if !endpoint.trim().is_empty() {
                return Ok(endpoint);
            }
        }

        self.browser_endpoint.clone().ok_or_else(|| {
            PortfolioError::Config(
                "ブラウザエンドポイントが設定されていません。`portfolio config --set-browser-endpoint WS_URL` で設定してください".into(),
            )
        })
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}
