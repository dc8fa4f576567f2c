//! リモートChromium経由の取得
//!
//! DevTools WebSocket（browserless等）に接続し、ページ描画後のHTMLを読む。
//! セッションは成功・失敗・パニックのいずれでも解放する。

use super::source::ProfileSource;
use crate::error::{PortfolioError, Result};
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct BrowserProfileSource {
    /// 未設定でも作成でき、取得時にエラーとなる
    endpoint: Option<String>,
    timeout: Duration,
}

impl BrowserProfileSource {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }
}

/// 接続中のブラウザとイベントハンドラタスク
struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    async fn connect(endpoint: &str) -> Result<Self> {
        let (browser, mut handler) = Browser::connect(endpoint.to_string())
            .await
            .map_err(|e| PortfolioError::Browser(format!("接続失敗: {}", e)))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self { browser, handler_task })
    }

    async fn page_html(&self, url: &str) -> Result<String> {
        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| PortfolioError::Browser(format!("ページ作成失敗: {}", e)))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| PortfolioError::Browser(format!("読込失敗: {}", e)))?;

        page.content()
            .await
            .map_err(|e| PortfolioError::Browser(format!("HTML取得失敗: {}", e)))
    }

    async fn release(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!(error = %e, "ブラウザのクローズに失敗");
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // ハンドラが止まればWebSocketも閉じる
        self.handler_task.abort();
    }
}

#[async_trait]
impl ProfileSource for BrowserProfileSource {
    fn name(&self) -> &'static str {
        "browser"
    }

    async fn fetch_profile(&self, url: &str) -> Result<String> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            PortfolioError::Config("ブラウザエンドポイントが設定されていません".into())
        })?;
        let session = BrowserSession::connect(endpoint).await?;

        let result = match tokio::time::timeout(self.timeout, session.page_html(url)).await {
            Ok(result) => result,
            Err(_) => Err(PortfolioError::Browser(format!(
                "{}秒以内に読み込めませんでした",
                self.timeout.as_secs()
            ))),
        };

        session.release().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_browser_error() {
        let source = BrowserProfileSource::new(
            Some("ws://127.0.0.1:9/devtools/browser".into()),
            Duration::from_secs(2),
        );
        let err = source.fetch_profile("https://example.com").await.unwrap_err();
        assert!(matches!(err, PortfolioError::Browser(_)));
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_config_error() {
        let source = BrowserProfileSource::new(None, Duration::from_secs(2));
        let err = source.fetch_profile("https://example.com").await.unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }
}
