//! メトリクス取得テスト
//!
//! モックサーバーと保存済みHTMLで取得〜抽出〜フォールバックを検証

use portfolio_common::MetricsPayload;
use portfolio_site::metrics::{FixtureProfileSource, HttpProfileSource, MetricsFetcher};
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROFILE_HTML: &str = r#"<html><body>
<table id="gsc_rsb_st"><tbody>
  <tr class="gsc_rsb_std"><td class="gsc_rsb_sc1">Citations</td><td>52</td><td>52</td></tr>
  <tr class="gsc_rsb_std"><td class="gsc_rsb_sc1">h-index</td><td>4</td><td>4</td></tr>
  <tr class="gsc_rsb_std"><td class="gsc_rsb_sc1">i10-index</td><td>3</td><td>3</td></tr>
</tbody></table>
<table id="gsc_a_t"><tbody>
  <tr class="gsc_a_tr"><td class="gsc_a_t"><a>Nano Energy</a><div class="gs_gray">Cited by 8</div></td></tr>
  <tr class="gsc_a_tr"><td class="gsc_a_t"><a>Chem Eng J</a><div class="gs_gray">Cited by 20</div></td></tr>
  <tr class="gsc_a_tr"><td class="gsc_a_t"><a>JSAMD</a><div class="gs_gray"></div></td></tr>
</tbody></table>
</body></html>"#;

fn http_fetcher(url: String) -> MetricsFetcher {
    let source = HttpProfileSource::new(Duration::from_secs(5)).expect("クライアント作成失敗");
    MetricsFetcher::new(Box::new(source), url, 6)
}

fn body(response: &portfolio_site::metrics::FunctionResponse) -> MetricsPayload {
    serde_json::from_str(&response.body).expect("JSON不正")
}

/// モックサーバーからの取得成功
#[tokio::test]
async fn test_http_source_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/citations"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PROFILE_HTML))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = http_fetcher(format!("{}/citations", server.uri()));
    let response = fetcher.invoke().await;

    assert_eq!(response.status_code, 200);
    let payload = body(&response);
    assert_eq!(payload.stats.cited_by_count, 52);
    assert_eq!(payload.stats.h_index, 4);
    assert_eq!(payload.stats.i10_index, 3);
    assert_eq!(payload.paper_citations, vec![8, 20, 0]);
}

/// 接続できない場合はフォールバック値と500
#[tokio::test]
async fn test_unreachable_endpoint_returns_fallback() {
    let fetcher = http_fetcher("http://127.0.0.1:9/citations".to_string());
    let response = fetcher.invoke().await;

    assert_eq!(response.status_code, 500);
    let payload = body(&response);
    assert_eq!(payload.stats.cited_by_count, 34);
    assert_eq!(payload.stats.h_index, 3);
    assert_eq!(payload.stats.i10_index, 2);
    assert_eq!(payload.paper_citations, vec![5, 15, 0, 0, 13, 1]);
    assert_eq!(response.headers.get("Access-Control-Allow-Origin").map(String::as_str), Some("*"));
}

/// エラーステータスもフォールバック
#[tokio::test]
async fn test_http_error_status_returns_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let fetcher = http_fetcher(server.uri());
    let response = fetcher.invoke().await;

    assert_eq!(response.status_code, 500);
    assert_eq!(body(&response), MetricsPayload::fallback());
}

/// ページ構造が変わった場合もフォールバック
#[tokio::test]
async fn test_layout_change_returns_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>captcha</body></html>"))
        .mount(&server)
        .await;

    let response = http_fetcher(server.uri()).invoke().await;
    assert_eq!(response.status_code, 500);
}

/// 保存済みHTMLからの取得
#[tokio::test]
async fn test_fixture_source() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("profile.html");
    std::fs::write(&file, PROFILE_HTML).unwrap();

    let fetcher = MetricsFetcher::new(Box::new(FixtureProfileSource::new(&file)), "unused", 2);
    let payload = fetcher.collect().await.expect("取得失敗");
    assert_eq!(payload.paper_citations, vec![8, 20]);
}

/// 存在しないHTMLファイルはエラー
#[tokio::test]
async fn test_fixture_source_missing_file() {
    let fetcher = MetricsFetcher::new(
        Box::new(FixtureProfileSource::new("/nonexistent/profile.html")),
        "unused",
        6,
    );
    assert!(fetcher.collect().await.is_err());
    assert_eq!(fetcher.invoke().await.status_code, 500);
}
