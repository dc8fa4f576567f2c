pub mod author_stats;
pub mod contact_form;
pub mod images;
pub mod mobile_menu;
pub mod navbar;
pub mod notification;
pub mod project_modal;
pub mod reveal;
