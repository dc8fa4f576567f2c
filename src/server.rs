//! HTTP関数のエンドポイント
//!
//! リクエストごとに `MetricsFetcher::invoke` を1回実行する。

use crate::error::{PortfolioError, Result};
use crate::metrics::{FunctionResponse, MetricsFetcher};
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const CITATIONS_PATH: &str = "/api/citations";

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (HeaderName::try_from(name.as_str()), HeaderValue::from_str(value)) {
                response.headers_mut().insert(name, value);
            }
        }
        response
    }
}

pub fn router(fetcher: Arc<MetricsFetcher>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(CITATIONS_PATH, get(citations))
        .layer(cors)
        .with_state(fetcher)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn citations(State(fetcher): State<Arc<MetricsFetcher>>) -> FunctionResponse {
    fetcher.invoke().await
}

pub async fn serve(addr: &str, fetcher: Arc<MetricsFetcher>) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| PortfolioError::Config(format!("待受アドレスが不正: {} ({})", addr, e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, path = CITATIONS_PATH, source = fetcher.source_name(), "待受開始");

    axum::serve(listener, router(fetcher))
        .await
        .map_err(|e| PortfolioError::Server(e.to_string()))
}
