//! Chat widget and chat-log payloads (`/api/chat/*`).

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Body of `POST /chat/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Classifier reply for a single chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One logged exchange between a visitor and the bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatLog {
    pub id: i64,
    pub user_message: String,
    pub bot_response: String,
    #[serde(default)]
    pub intent_tag: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    pub created_at: Timestamp,
}

/// A page of chat logs plus the overall total.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory {
    pub total: u64,
    pub logs: Vec<ChatLog>,
}

/// A logged message that has not been used for training yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewDataCandidate {
    pub id: i64,
    pub user_message: String,
    #[serde(default)]
    pub predicted_intent: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body of `POST /chat/assign`: attach a logged message to an intent as a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRequest {
    pub log_id: i64,
    pub intent_id: i64,
    pub pattern_text: String,
}
