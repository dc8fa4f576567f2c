//! プロジェクト詳細モーダル
//!
//! 状態遷移と、モーダル本文のHTML生成

use crate::html::escape_html;
use crate::menu::MenuState;
use crate::projects::ProjectCatalog;
use crate::types::Project;

/// モーダルの状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { project_id: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    /// 識別子がカタログにあれば開く。無ければ状態はそのまま
    pub fn open<'a>(&self, id: &str, catalog: &'a ProjectCatalog) -> (ModalState, Option<&'a Project>) {
        match catalog.get(id) {
            Some(project) => (ModalState::Open { project_id: project.id.clone() }, Some(project)),
            None => (self.clone(), None),
        }
    }

    /// 閉じるボタン・オーバーレイ・Escapeのいずれでも同じ遷移
    pub fn close(&self) -> ModalState {
        ModalState::Closed
    }
}

/// Escapeキーで閉じる対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeTarget {
    Modal,
    Menu,
    Nothing,
}

/// Escapeキーの振り分け（モーダルが最優先）
pub fn route_escape(modal: &ModalState, menu: MenuState) -> EscapeTarget {
    if modal.is_open() {
        EscapeTarget::Modal
    } else if menu.is_open() {
        EscapeTarget::Menu
    } else {
        EscapeTarget::Nothing
    }
}

const IMAGE_STYLE: &str = "width: 100%; border-radius: var(--radius-lg); margin-bottom: 1rem; box-shadow: var(--shadow-medium);";

/// モーダル本文のHTMLを生成
///
/// 見出し・日付・説明・特徴リスト・技術タグ・コード（任意）・画像の順。
/// 埋め込むテキストはすべてエスケープする。
pub fn render_project(project: &Project) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<h2 class=\"modal-title\">{}</h2>\n<p class=\"modal-subtitle\">{}</p>\n",
        escape_html(&project.title),
        escape_html(&project.date),
    ));
    html.push_str(&format!(
        "<div class=\"modal-description\">\n<p>{}</p>\n</div>\n",
        escape_html(&project.description),
    ));

    let features: String = project
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect();
    html.push_str(&format!(
        "<div class=\"modal-features\">\n<h4>Key Features &amp; Capabilities:</h4>\n<ul>{}</ul>\n</div>\n",
        features,
    ));

    let tags: String = project
        .technologies
        .iter()
        .map(|t| format!("<span class=\"tech-tag\">{}</span>", escape_html(t)))
        .collect();
    html.push_str(&format!(
        "<div class=\"modal-features\">\n<h4>Technologies Used:</h4>\n<div class=\"project-tech\" style=\"margin-top: 1rem;\">{}</div>\n</div>\n",
        tags,
    ));

    if let Some(code) = project.code.as_deref().filter(|c| !c.is_empty()) {
        html.push_str(&format!(
            "<div class=\"modal-features\">\n<h4>Code Implementation:</h4>\n<div class=\"modal-code\"><pre><code>{}</code></pre></div>\n</div>\n",
            escape_html(code),
        ));
    }

    html.push_str(&render_images(project));
    html
}

fn render_images(project: &Project) -> String {
    if !project.images.is_empty() {
        return project
            .images
            .iter()
            .map(|img| {
                let caption = escape_html(&img.caption);
                format!(
                    "<div class=\"modal-image\" style=\"margin-top: 1.5rem;\">\n<h4 style=\"margin-bottom: 0.5rem; color: var(--primary);\">{}</h4>\n<img src=\"{}\" alt=\"{}\" style=\"{}\">\n</div>\n",
                    caption,
                    escape_html(&img.src),
                    caption,
                    IMAGE_STYLE,
                )
            })
            .collect();
    }

    match project.image.as_deref() {
        Some(src) if !src.is_empty() => format!(
            "<div class=\"modal-image\" style=\"margin-top: 1.5rem;\">\n<img src=\"{}\" alt=\"{}\" style=\"{}\">\n</div>\n",
            escape_html(src),
            escape_html(&project.title),
            IMAGE_STYLE,
        ),
        _ => String::new(),
    }
}
