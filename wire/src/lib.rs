//! Shared REST wire schema for the PMB chatbot backend.
//!
//! This crate owns the JSON representation used by both `client` and `cli`:
//! request/response DTOs for every `/api` endpoint, the endpoint path
//! builders, and the [`ApiError`] every HTTP adapter maps failures into.
//! Field names mirror the backend payloads exactly so serde stays lossless.

pub mod auth;
pub mod chat;
pub mod endpoints;
pub mod error;
pub mod intents;
pub mod time;
pub mod training;

pub use auth::{AdminCreate, LoginRequest, RegisterRequest, Role, TokenResponse, User};
pub use chat::{AssignRequest, ChatHistory, ChatLog, ChatReply, ChatRequest, NewDataCandidate};
pub use error::{ApiError, CONNECTION_ERROR_MESSAGE};
pub use intents::{Intent, IntentPayload, IntentResponse, IntentSummary, IntentUpdate, Pattern, RetrainResult};
pub use time::Timestamp;
pub use training::{ClassReportEntry, TrainingRunDetail, TrainingRunSummary};

use serde::{Deserialize, Serialize};

/// Generic `{ "message": ... }` acknowledgement returned by delete/assign endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Convert a 0..1 confidence score into a rounded percentage.
#[must_use]
pub fn confidence_percent(confidence: Option<f64>) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let percent = (confidence.unwrap_or(0.0) * 100.0).round() as i64;
    percent
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
