//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render forms, navigation, and the user directory. Session-aware
//! components observe the token store themselves rather than reading a shared
//! context.

pub mod banner;
pub mod field;
pub mod login_form;
pub mod navbar;
pub mod register_form;
pub mod theme_toggle;
pub mod user_list;
