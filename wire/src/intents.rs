//! Intent dataset payloads (`/api/intents/*`).

#[cfg(test)]
#[path = "intents_test.rs"]
mod intents_test;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Row in the intent list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSummary {
    pub id: i64,
    pub tag: String,
    pub pattern_count: u32,
    pub response_count: u32,
}

/// A user phrasing that maps to an intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: i64,
    pub intent_id: i64,
    pub pattern_text: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A candidate bot answer for an intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResponse {
    pub id: i64,
    pub intent_id: i64,
    pub response_text: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Full intent with its patterns and responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub id: i64,
    pub tag: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    #[serde(default)]
    pub responses: Vec<IntentResponse>,
}

impl Intent {
    #[must_use]
    pub fn pattern_texts(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.pattern_text.clone()).collect()
    }

    #[must_use]
    pub fn response_texts(&self) -> Vec<String> {
        self.responses.iter().map(|r| r.response_text.clone()).collect()
    }

    /// Full replacement payload for this intent with its current contents.
    #[must_use]
    pub fn to_update(&self) -> IntentUpdate {
        IntentUpdate {
            tag: Some(self.tag.clone()),
            patterns: Some(self.pattern_texts()),
            responses: Some(self.response_texts()),
        }
    }
}

/// Body of `POST /intents/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentPayload {
    pub tag: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

impl IntentPayload {
    /// Build a payload from the editor form, where patterns and responses are
    /// entered one per line.
    #[must_use]
    pub fn from_form(tag: &str, patterns: &str, responses: &str) -> Self {
        Self {
            tag: tag.trim().to_owned(),
            patterns: split_lines(patterns),
            responses: split_lines(responses),
        }
    }
}

impl From<IntentPayload> for IntentUpdate {
    fn from(value: IntentPayload) -> Self {
        Self {
            tag: Some(value.tag),
            patterns: Some(value.patterns),
            responses: Some(value.responses),
        }
    }
}

/// Body of `PUT /intents/{id}`. Absent fields are left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<String>>,
}

/// Response of `POST /intents/retrain`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetrainResult {
    pub message: String,
    #[serde(default)]
    pub metrics: Option<RetrainMetrics>,
}

/// Summary metrics of a completed retrain; accuracies are percentages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrainMetrics {
    pub total_samples: Option<u64>,
    pub train_samples: Option<u64>,
    pub val_samples: Option<u64>,
    pub test_samples: Option<u64>,
    pub epochs_run: Option<u32>,
    pub train_accuracy: Option<f64>,
    pub val_accuracy: Option<f64>,
    pub test_accuracy: Option<f64>,
}

/// Split editor text into trimmed non-empty lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Append `line` to multi-line editor text.
#[must_use]
pub fn append_line(text: &str, line: &str) -> String {
    if text.is_empty() { line.to_owned() } else { format!("{text}\n{line}") }
}
