//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, native dialogs) from
//! page and component logic so the rest stays testable natively.

pub mod dialog;
pub mod token_storage;
