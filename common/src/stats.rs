//! 引用数表示のHTML

use crate::types::AuthorStats;

/// `#publications` の直前に挿入する著者統計ブロック（中身のみ）
pub fn render_author_stats(stats: &AuthorStats) -> String {
    [
        (stats.cited_by_count, "Total Citations"),
        (stats.h_index, "h-index"),
        (stats.i10_index, "i10-index"),
    ]
    .iter()
    .map(|(value, label)| {
        format!(
            "<div class=\"stat\">\n<div class=\"stat-number\">{}</div>\n<div class=\"stat-label\">{}</div>\n</div>\n",
            value, label
        )
    })
    .collect()
}

/// 論文カードの `.publication-citations` に入れる行
pub fn render_citation_badge(citations: u32) -> String {
    format!("<i class=\"fas fa-citation\"></i> <strong>Citations:</strong> {}", citations)
}
