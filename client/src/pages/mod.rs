//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and form state and delegates
//! formatting to `state` helpers. Admin pages render inside `AdminLayout`
//! behind the admin guard.

pub mod chat;
pub mod dashboard;
pub mod history;
pub mod intent_detail;
pub mod intents;
pub mod login;
pub mod register;
pub mod training_detail;
pub mod training_history;
pub mod users;
