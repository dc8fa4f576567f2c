//! データモデルの型定義
//!
//! ページ(WASM)とメトリクス取得(CLI)で共有される型:
//! - Project: モーダルに表示するプロジェクト情報
//! - AuthorStats / MetricsPayload: 引用数メトリクス

use serde::{Deserialize, Serialize};

/// 取得失敗時に返す固定の著者統計
pub const FALLBACK_STATS: AuthorStats = AuthorStats {
    cited_by_count: 34,
    h_index: 3,
    i10_index: 2,
};

/// 取得失敗時に返す論文ごとの引用数（掲載順）
pub const FALLBACK_PAPER_CITATIONS: [u32; 6] = [5, 15, 0, 0, 13, 1];

/// キャプション付き画像
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    pub caption: String,
}

/// プロジェクト情報（起動時に定義され、以後不変）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,

    /// キャプション付き画像（空でなければ `image` より優先）
    pub images: Vec<ProjectImage>,

    /// キャプションなしの単一画像
    pub image: Option<String>,

    /// モーダル内に表示するコード
    pub code: Option<String>,
}

/// 著者統計（総引用数 / h-index / i10-index）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub cited_by_count: u32,
    pub h_index: u32,
    pub i10_index: u32,
}

/// メトリクス取得結果（HTTP関数のレスポンスボディ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsPayload {
    pub stats: AuthorStats,
    #[serde(rename = "paperCitations")]
    pub paper_citations: Vec<u32>,
}

impl MetricsPayload {
    /// 固定のフォールバック値
    pub fn fallback() -> Self {
        Self {
            stats: FALLBACK_STATS,
            paper_citations: FALLBACK_PAPER_CITATIONS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_payload_values() {
        let payload = MetricsPayload::fallback();
        assert_eq!(payload.stats.cited_by_count, 34);
        assert_eq!(payload.stats.h_index, 3);
        assert_eq!(payload.stats.i10_index, 2);
        assert_eq!(payload.paper_citations, vec![5, 15, 0, 0, 13, 1]);
    }

    #[test]
    fn test_metrics_payload_wire_shape() {
        let json = serde_json::to_value(MetricsPayload::fallback()).expect("シリアライズ失敗");
        assert_eq!(json["stats"]["cited_by_count"], 34);
        assert_eq!(json["stats"]["h_index"], 3);
        assert_eq!(json["stats"]["i10_index"], 2);
        assert_eq!(json["paperCitations"], serde_json::json!([5, 15, 0, 0, 13, 1]));
    }

    #[test]
    fn test_metrics_payload_deserialize() {
        let json = r#"{
            "stats": {"cited_by_count": 40, "h_index": 4, "i10_index": 2},
            "paperCitations": [7, 16]
        }"#;

        let payload: MetricsPayload = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(payload.stats.cited_by_count, 40);
        assert_eq!(payload.paper_citations, vec![7, 16]);
    }

    #[test]
    fn test_project_deserialize_defaults() {
        let json = r#"{"id": "demo", "title": "Demo"}"#;

        let project: Project = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(project.id, "demo");
        assert!(project.features.is_empty());
        assert!(project.images.is_empty());
        assert_eq!(project.code, None); // デフォルト値
    }
}
