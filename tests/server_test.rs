//! HTTP関数エンドポイントのテスト

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use portfolio_common::MetricsPayload;
use portfolio_site::metrics::{FixtureProfileSource, MetricsFetcher};
use portfolio_site::server::{router, CITATIONS_PATH};
use std::sync::Arc;
use tower::ServiceExt;

fn fetcher_for(path: &std::path::Path) -> Arc<MetricsFetcher> {
    Arc::new(MetricsFetcher::new(Box::new(FixtureProfileSource::new(path)), "unused", 6))
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .uri(uri)
        .header("origin", "https://portfolio.example.com")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// 取得成功時は200とJSON
#[tokio::test]
async fn test_citations_ok() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("profile.html");
    std::fs::write(
        &file,
        r#"<table><tr class="gsc_rsb_std"><td>Citations</td><td>60</td></tr></table>"#,
    )
    .unwrap();

    let response = get(router(fetcher_for(&file)), CITATIONS_PATH).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload: MetricsPayload = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload.stats.cited_by_count, 60);
}

/// 取得失敗時は500とフォールバック値
#[tokio::test]
async fn test_citations_fallback() {
    let response = get(
        router(fetcher_for(std::path::Path::new("/nonexistent/profile.html"))),
        CITATIONS_PATH,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload: MetricsPayload = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload, MetricsPayload::fallback());
}

/// ヘルスチェック
#[tokio::test]
async fn test_health() {
    let response = get(
        router(fetcher_for(std::path::Path::new("/nonexistent"))),
        "/health",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
