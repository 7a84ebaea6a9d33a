//! Error type shared by every HTTP adapter.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures collapse into one generic connection message for the
//! user. Server rejections keep the backend's `detail` verbatim, because that
//! text is already written for end users ("Email atau password salah").

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Message shown for any network/transport failure.
pub const CONNECTION_ERROR_MESSAGE: &str = "Maaf, terjadi kesalahan koneksi. Silakan coba lagi.";

/// Fallback when the backend rejects a request without a detail.
pub const REQUEST_FAILED: &str = "Permintaan gagal";
pub const ADD_ADMIN_FAILED: &str = "Gagal menambah admin";
pub const DELETE_FAILED: &str = "Gagal menghapus";
pub const SAVE_INTENT_FAILED: &str = "Gagal menyimpan intent";
pub const RETRAIN_FAILED: &str = "Gagal melatih model";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused, CORS, offline).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{detail}")]
    Server { status: u16, detail: String },
    /// A 2xx body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a raw error body, falling back to
    /// `fallback` when the body carries no usable `detail`.
    #[must_use]
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_else(|| fallback.to_owned());
        Self::Server { status, detail }
    }

    /// Text to show the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => CONNECTION_ERROR_MESSAGE.to_owned(),
            Self::Server { detail, .. } => detail.clone(),
            Self::Decode(_) | Self::Encode(_) => self.to_string(),
        }
    }

    /// HTTP status for server rejections.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the human-readable `detail` out of a FastAPI error body.
///
/// String details are returned as-is. Validation errors arrive as an array of
/// `{ loc, msg, type }` objects; their `msg` fields are joined with `"; "`.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
