pub mod api;
pub mod api_utils;
pub mod components;
pub mod confirm_dialog;
pub mod details_form;
pub mod export;
pub mod icons;
pub mod lifecycle;
pub mod list_utils;
pub mod list_view;
pub mod modal_frame;
pub mod notifications;
