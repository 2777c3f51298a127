//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared capabilities (config, session) from Leptos
//! context providers installed by the app root.

pub mod auth_form;
pub mod labelled_input;
