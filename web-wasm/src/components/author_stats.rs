//! 著者統計と論文ごとの引用数
//!
//! まず固定値を表示し、`#publications` に `data-metrics-endpoint` があれば
//! そこから取得した値で置き換える（失敗時は固定値のまま）。

use crate::api::metrics::fetch_metrics;
use crate::dom;
use gloo::utils::document;
use portfolio_common::stats::{render_author_stats, render_citation_badge};
use portfolio_common::{AuthorStats, MetricsPayload};

const ENDPOINT_ATTR: &str = "data-metrics-endpoint";

pub fn load() {
    render(&MetricsPayload::fallback());

    let endpoint = dom::by_id("publications").and_then(|section| section.get_attribute(ENDPOINT_ATTR));
    if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_metrics(&endpoint).await {
                Ok(payload) => render(&payload),
                Err(e) => gloo::console::warn!("引用数を取得できません。固定値を表示します", e),
            }
        });
    }
}

pub fn render(payload: &MetricsPayload) {
    insert_author_stats(&payload.stats);
    for (index, citations) in payload.paper_citations.iter().enumerate() {
        update_publication_citations(index, *citations);
    }
}

/// `#publications` の直前に統計ブロックを置く（既にあれば中身だけ更新）
fn insert_author_stats(stats: &AuthorStats) {
    let Some(publications) = dom::by_id("publications") else {
        return;
    };

    if let Ok(Some(existing)) = document().query_selector(".author-stats") {
        existing.set_inner_html(&render_author_stats(stats));
        return;
    }

    let Some(parent) = publications.parent_node() else {
        return;
    };
    let Ok(block) = document().create_element("div") else {
        return;
    };
    block.set_class_name("author-stats");
    block.set_inner_html(&render_author_stats(stats));
    let reference: &web_sys::Node = &publications;
    let _ = parent.insert_before(&block, Some(reference));
}

fn update_publication_citations(index: usize, citations: u32) {
    let cards = dom::query_all(".publication-card");
    let Some(card) = cards.get(index) else {
        return;
    };

    let line = match card.query_selector(".publication-citations") {
        Ok(Some(line)) => line,
        _ => {
            let Ok(line) = document().create_element("div") else {
                return;
            };
            line.set_class_name("publication-citations");
            if card.append_child(&line).is_err() {
                return;
            }
            line
        }
    };
    line.set_inner_html(&render_citation_badge(citations));
}
