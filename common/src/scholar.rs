//! プロフィールページからの引用数抽出
//!
//! ネットワークには触れず、取得済みHTMLだけを対象にする。
//! ページ構造:
//! - 概要表: `tr.gsc_rsb_std` の1〜3行目、各行の最終セル（総引用数 / h-index / i10-index）
//! - 論文行: `tr.gsc_a_tr` の先頭から最大N件、`td.gsc_a_t .gs_gray` 内の最初の数値

use crate::error::{Error, Result};
use crate::types::{AuthorStats, MetricsPayload};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// 取り出す論文数の既定値
pub const DEFAULT_MAX_PAPERS: usize = 6;

lazy_static! {
    static ref DIGITS_RE: Regex = Regex::new(r"\d+").unwrap();
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("セレクタ {} が不正: {:?}", css, e)))
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

/// 先頭の整数を読む（桁区切りのカンマは無視、読めなければ0）
pub fn leading_number(text: &str) -> u32 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// 文中で最初に現れる整数（"Cited by 13" → 13、無ければ0）
pub fn first_number(text: &str) -> u32 {
    DIGITS_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// HTMLからメトリクスを抽出
///
/// # Arguments
/// * `html` - プロフィールページのHTML
/// * `max_papers` - 論文行を先頭から何件読むか
///
/// # Returns
/// * `Ok(MetricsPayload)` - 抽出成功（欠けたセルは0）
/// * `Err` - 概要表が1行も無い（レイアウト変更とみなす）
pub fn extract_payload(html: &str, max_papers: usize) -> Result<MetricsPayload> {
    let document = Html::parse_document(html);

    let summary_row = selector("tr.gsc_rsb_std")?;
    let last_cell = selector("td:last-child")?;
    let paper_row = selector("tr.gsc_a_tr")?;
    let paper_citation = selector("td.gsc_a_t .gs_gray")?;

    let summary: Vec<u32> = document
        .select(&summary_row)
        .take(3)
        .map(|row| {
            row.select(&last_cell)
                .last()
                .map(|cell| leading_number(&element_text(&cell)))
                .unwrap_or(0)
        })
        .collect();

    if summary.is_empty() {
        return Err(Error::Parse("概要表 (tr.gsc_rsb_std) が見つかりません".into()));
    }

    let value = |i: usize| summary.get(i).copied().unwrap_or(0);
    let stats = AuthorStats {
        cited_by_count: value(0),
        h_index: value(1),
        i10_index: value(2),
    };

    let paper_citations = document
        .select(&paper_row)
        .take(max_papers)
        .map(|row| {
            row.select(&paper_citation)
                .next()
                .map(|el| first_number(&element_text(&el)))
                .unwrap_or(0)
        })
        .collect();

    Ok(MetricsPayload { stats, paper_citations })
}
