//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers;
//! pages compose them per route.

pub mod admin_layout;
pub mod chat_bot;
pub mod guard;
