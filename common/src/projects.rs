//! プロジェクトカタログ
//!
//! モーダル表示用のプロジェクト情報を識別子で引く。
//! ページに `<script type="application/json" id="project-data">` があればそちらを使う。

use crate::error::{Error, Result};
use crate::types::Project;
use std::collections::BTreeMap;

/// 識別子 → プロジェクトの不変マップ
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: BTreeMap<String, Project>,
}

impl ProjectCatalog {
    /// プロジェクト一覧からカタログを作成（同じ識別子は後勝ち）
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// 組み込みのプロジェクト
    pub fn builtin() -> Self {
        Self::new(vec![
            Project {
                id: "upec".into(),
                title: "UPEC: A Multi-Modal AI-Powered Device".into(),
                date: "2024-2025".into(),
                description: "Compact handheld device for cardiac diagnostics using Hybrid LSTM-CNN.".into(),
                features: vec!["AUC >97%".into(), "Real-time alerts".into(), "Portable design".into()],
                technologies: vec!["TensorFlow".into(), "LSTM-CNN".into(), "Arduino".into()],
                image: Some("ucpe.jpg".into()),
                ..Default::default()
            },
            Project {
                id: "eeg".into(),
                title: "EEG-Driven Motor Imagery Classification".into(),
                date: "2025".into(),
                description: "CNN-Transformer system for stroke rehabilitation.".into(),
                features: vec!["88% accuracy".into(), "Real-time biofeedback".into(), "Gamified platform".into()],
                technologies: vec!["PyTorch".into(), "CNN-Transformer".into(), "EEG Processing".into()],
                image: Some("eeg.jpg".into()),
                ..Default::default()
            },
        ])
    }

    /// JSON配列からカタログを作成
    ///
    /// # Errors
    /// * JSONとして不正な場合
    /// * 識別子が空のプロジェクトを含む場合
    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        if let Some(pos) = projects.iter().position(|p| p.id.trim().is_empty()) {
            return Err(Error::Config(format!("{}件目のプロジェクトに id がありません", pos + 1)));
        }
        Ok(Self::new(projects))
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.projects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
