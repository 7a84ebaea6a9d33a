//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is provided app-wide through context. The other modules hold
//! page-local state as plain structs so their transitions are unit-tested
//! without a reactive runtime.

pub mod chat;
pub mod history;
pub mod intents;
pub mod session;
pub mod training;
