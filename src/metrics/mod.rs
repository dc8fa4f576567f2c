//! 引用数メトリクス取得（HTTP関数本体）
//!
//! 1回の呼び出しにつき外部取得は1回、リトライなし。
//! 失敗時はログを残し、固定値とステータス500を返す。

mod browser;
mod source;

pub use browser::BrowserProfileSource;
pub use source::{FixtureProfileSource, HttpProfileSource, ProfileSource, SourceKind};

use crate::config::Config;
use crate::error::Result;
use portfolio_common::{extract_payload, MetricsPayload};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// HTTP関数のレスポンス（statusCode / headers / body）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    pub fn json(status_code: u16, payload: &MetricsPayload) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        Self {
            status_code,
            headers,
            body: serde_json::to_string(payload).unwrap_or_default(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.status_code != 200
    }
}

pub struct MetricsFetcher {
    source: Box<dyn ProfileSource>,
    profile_url: String,
    max_papers: usize,
}

impl MetricsFetcher {
    pub fn new(source: Box<dyn ProfileSource>, profile_url: impl Into<String>, max_papers: usize) -> Self {
        Self {
            source,
            profile_url: profile_url.into(),
            max_papers,
        }
    }

    /// 設定から取得元を選んで作成
    ///
    /// # Arguments
    /// * `kind` - 取得手段（`html` 指定時は無視）
    /// * `html` - 保存済みHTMLファイル
    pub fn from_config(config: &Config, kind: SourceKind, html: Option<PathBuf>) -> Result<Self> {
        let source: Box<dyn ProfileSource> = match (html, kind) {
            (Some(path), _) => Box::new(FixtureProfileSource::new(path)),
            (None, SourceKind::Http) => Box::new(HttpProfileSource::new(config.timeout())?),
            (None, SourceKind::Browser) => Box::new(BrowserProfileSource::new(
                config.effective_browser_endpoint().ok(),
                config.timeout(),
            )),
        };

        Ok(Self::new(source, config.effective_profile_url(), config.max_papers))
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// 取得と抽出（エラーはそのまま返す）
    pub async fn collect(&self) -> Result<MetricsPayload> {
        tracing::debug!(source = self.source.name(), url = %self.profile_url, "プロフィール取得開始");
        let html = self.source.fetch_profile(&self.profile_url).await?;
        tracing::debug!(bytes = html.len(), "プロフィール取得完了");

        let payload = extract_payload(&html, self.max_papers)?;
        Ok(payload)
    }

    /// HTTP関数として1回実行
    pub async fn invoke(&self) -> FunctionResponse {
        match self.collect().await {
            Ok(payload) => {
                tracing::info!(
                    cited_by = payload.stats.cited_by_count,
                    h_index = payload.stats.h_index,
                    papers = payload.paper_citations.len(),
                    "引用数を取得"
                );
                FunctionResponse::json(200, &payload)
            }
            Err(e) => {
                tracing::error!(error = %e, source = self.source.name(), "取得に失敗したためフォールバック値を返します");
                FunctionResponse::json(500, &MetricsPayload::fallback())
            }
        }
    }
}
