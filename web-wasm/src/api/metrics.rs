//! 引用数メトリクスAPI呼び出し

use portfolio_common::MetricsPayload;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// HTTP関数から引用数を取得
///
/// ステータス200以外（取得失敗時のフォールバック応答を含む）はエラーとして扱い、
/// 呼び出し側は表示中の値を維持する。
pub async fn fetch_metrics(endpoint: &str) -> Result<MetricsPayload, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let payload: MetricsPayload = serde_wasm_bindgen::from_value(json)?;
    Ok(payload)
}
