//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and shared list/form widgets while reading
//! and writing the [`crate::app::AppContext`] provided by the app root.

pub mod alert_toast;
pub mod app_layout;
pub mod breadcrumb;
pub mod confirm_dialog;
pub mod list_controls;
pub mod nav_drawer;
pub mod public_layout;
pub mod store_form;
