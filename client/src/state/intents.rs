//! Intent editor state: the list-page form and detail-page list edits.
//!
//! DESIGN
//! ======
//! The backend replaces an intent's patterns and responses wholesale on
//! `PUT`, so every detail-page edit produces a complete [`IntentUpdate`].

#[cfg(test)]
#[path = "intents_test.rs"]
mod intents_test;

use wire::intents::append_line;
use wire::{Intent, IntentPayload, IntentUpdate};

/// Create/edit form on the intents page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntentForm {
    pub open: bool,
    /// Intent being edited; `None` means the form creates a new intent.
    pub editing: Option<i64>,
    pub tag: String,
    /// One pattern per line.
    pub patterns: String,
    /// One response per line.
    pub responses: String,
}

impl IntentForm {
    pub fn new_intent() -> Self {
        Self { open: true, ..Self::default() }
    }

    pub fn edit(intent: &Intent) -> Self {
        Self {
            open: true,
            editing: Some(intent.id),
            tag: intent.tag.clone(),
            patterns: intent.pattern_texts().join("\n"),
            responses: intent.response_texts().join("\n"),
        }
    }

    /// Copy an inbox message into the pattern list and show the form.
    pub fn add_pattern(&mut self, text: &str) {
        self.open = true;
        self.patterns = append_line(&self.patterns, text);
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() { "Edit Intent" } else { "Tambah Intent Baru" }
    }

    pub fn payload(&self) -> IntentPayload {
        IntentPayload::from_form(&self.tag, &self.patterns, &self.responses)
    }
}

/// Which list of an intent an edit touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentList {
    Patterns,
    Responses,
}

/// Full update adding `text` to one list. Blank text yields `None`.
pub fn with_added(intent: &Intent, list: IntentList, text: &str) -> Option<IntentUpdate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut update = intent.to_update();
    target(&mut update, list).push(text.to_owned());
    Some(update)
}

/// Full update removing every entry equal to `text` from one list.
pub fn with_removed(intent: &Intent, list: IntentList, text: &str) -> IntentUpdate {
    let mut update = intent.to_update();
    target(&mut update, list).retain(|entry| entry != text);
    update
}

fn target(update: &mut IntentUpdate, list: IntentList) -> &mut Vec<String> {
    let slot = match list {
        IntentList::Patterns => &mut update.patterns,
        IntentList::Responses => &mut update.responses,
    };
    slot.get_or_insert_with(Vec::new)
}
