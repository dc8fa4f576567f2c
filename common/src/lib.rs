//! Portfolio Common Library
//!
//! ページ(WASM)とメトリクス取得(CLI)で共有される型と、DOMに依存しないページロジック

pub mod types;
pub mod layout;
pub mod error;
pub mod html;
pub mod projects;
pub mod scroll;
pub mod menu;
pub mod modal;
pub mod form;
pub mod notification;
pub mod stats;
#[cfg(feature = "scrape")]
pub mod scholar;

pub use types::{AuthorStats, MetricsPayload, Project, ProjectImage};
pub use error::{Error, Result};
pub use projects::ProjectCatalog;
pub use scroll::{active_section, anchor_scroll_target, in_reveal_zone, ScrollFlags, SectionBounds};
pub use menu::{MenuEvent, MenuState};
pub use modal::{render_project, route_escape, EscapeTarget, ModalState};
pub use form::{ContactSubmission, FormError, FormPhase};
pub use notification::{Notification, NotificationKind};
#[cfg(feature = "scrape")]
pub use scholar::extract_payload;
