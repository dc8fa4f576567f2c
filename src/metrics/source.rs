//! プロフィールページの取得元
//!
//! 抽出ロジック（portfolio_common::scholar）から取得手段を切り離し、
//! テストでは保存済みHTMLやモックサーバーに差し替えられるようにする。

use crate::error::Result;
use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 取得手段
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// 素のHTTPS GET
    Http,
    /// リモートのヘッドレスChromium
    #[default]
    Browser,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Http => "http",
            SourceKind::Browser => "browser",
        }
    }
}

/// プロフィールページのHTMLを返すもの
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// ログ用の名前
    fn name(&self) -> &'static str;

    async fn fetch_profile(&self, url: &str) -> Result<String>;
}

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// reqwestによる取得
pub struct HttpProfileSource {
    client: reqwest::Client,
}

impl HttpProfileSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_profile(&self, url: &str) -> Result<String> {
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html)
    }
}

/// 保存済みHTMLファイル（URLは無視）
pub struct FixtureProfileSource {
    path: PathBuf,
}

impl FixtureProfileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfileSource for FixtureProfileSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_profile(&self, _url: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
