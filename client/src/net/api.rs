//! REST API helpers for communicating with the PMB backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with a transport error since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx answers keep the
//! backend's `detail` text, or the per-call fallback when it sends none.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use session::{AuthBackend, LOGIN_FAILED, REGISTER_FAILED};
use wire::endpoints;
use wire::{
    AdminCreate, ApiError, ChatHistory, ChatReply, ChatRequest, Intent, IntentPayload, IntentSummary, IntentUpdate,
    LoginRequest, MessageResponse, NewDataCandidate, RegisterRequest, RetrainResult, TokenResponse,
    TrainingRunDetail, TrainingRunSummary, User,
};

pub use wire::error::{ADD_ADMIN_FAILED, DELETE_FAILED, REQUEST_FAILED, RETRAIN_FAILED, SAVE_INTENT_FAILED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One REST request, described independently of the HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
    pub fallback: &'static str,
}

impl ApiCall {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), bearer: None, body: None, fallback: REQUEST_FAILED }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn with_json<B: Serialize>(method: Method, path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { body: Some(body), ..Self::new(method, path) })
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn fallback(mut self, message: &'static str) -> Self {
        self.fallback = message;
        self
    }

    pub fn url(&self, base: &str) -> String {
        endpoints::url(base, &self.path)
    }

    /// Send the request and decode a JSON answer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives,
    /// [`ApiError::Server`] for non-2xx answers and [`ApiError::Decode`]
    /// when a success body does not match `T`.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url(crate::config::api_base());
            let mut builder = match self.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = &self.bearer {
                builder = builder.header("Authorization", &endpoints::bearer(token));
            }
            let request = match &self.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;
            let response = request.send().await.map_err(|e| {
                log::warn!("api: {:?} {} failed: {e}", self.method, self.path);
                ApiError::Transport(e.to_string())
            })?;
            let status = response.status();
            let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            decode(status, &body, self.fallback)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport(format!("{} is only reachable from the browser", self.path)))
        }
    }
}

/// Map a raw HTTP answer to the caller's type.
fn decode<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body, fallback));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH
// =============================================================================

/// [`AuthBackend`] over `fetch`, against the compiled-in API base.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthBackend;

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        ApiCall::with_json(Method::Post, endpoints::AUTH_LOGIN, request)?.fallback(LOGIN_FAILED).send().await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        ApiCall::with_json(Method::Post, endpoints::AUTH_REGISTER, request)?
            .fallback(REGISTER_FAILED)
            .send()
            .await
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        ApiCall::get(endpoints::AUTH_ME).bearer(token).send().await
    }
}

// =============================================================================
// USERS (admin, bearer)
// =============================================================================

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn list_admins(token: &str) -> Result<Vec<User>, ApiError> {
    ApiCall::get(endpoints::USERS_ADMINS).bearer(token).send().await
}

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn list_regular_users(token: &str) -> Result<Vec<User>, ApiError> {
    ApiCall::get(endpoints::USERS_REGULAR).bearer(token).send().await
}

/// # Errors
///
/// See [`ApiCall::send`]; rejections fall back to [`ADD_ADMIN_FAILED`].
pub async fn create_admin(token: &str, form: &AdminCreate) -> Result<User, ApiError> {
    ApiCall::with_json(Method::Post, endpoints::USERS_CREATE_ADMIN, form)?
        .bearer(token)
        .fallback(ADD_ADMIN_FAILED)
        .send()
        .await
}

/// # Errors
///
/// See [`ApiCall::send`]; rejections fall back to [`DELETE_FAILED`].
pub async fn delete_user(token: &str, user_id: i64) -> Result<MessageResponse, ApiError> {
    ApiCall::delete(endpoints::user(user_id)).bearer(token).fallback(DELETE_FAILED).send().await
}

// =============================================================================
// CHAT
// =============================================================================

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn send_chat(message: &str) -> Result<ChatReply, ApiError> {
    ApiCall::with_json(Method::Post, endpoints::CHAT, &ChatRequest { message: message.to_owned() })?
        .send()
        .await
}

/// Fetch one page (zero-based) of the chat log.
///
/// # Errors
///
/// See [`ApiCall::send`].
pub async fn fetch_chat_history(page: u64) -> Result<ChatHistory, ApiError> {
    let limit = endpoints::HISTORY_PAGE_SIZE;
    ApiCall::get(endpoints::chat_history(limit, page * u64::from(limit))).send().await
}

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn fetch_new_data() -> Result<Vec<NewDataCandidate>, ApiError> {
    ApiCall::get(endpoints::CHAT_NEW_DATA).send().await
}

// =============================================================================
// INTENTS
// =============================================================================

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn list_intents() -> Result<Vec<IntentSummary>, ApiError> {
    ApiCall::get(endpoints::INTENTS).send().await
}

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn fetch_intent(intent_id: i64) -> Result<Intent, ApiError> {
    ApiCall::get(endpoints::intent(intent_id)).send().await
}

/// # Errors
///
/// See [`ApiCall::send`]; rejections fall back to [`SAVE_INTENT_FAILED`].
pub async fn create_intent(payload: &IntentPayload) -> Result<Intent, ApiError> {
    ApiCall::with_json(Method::Post, endpoints::INTENTS, payload)?.fallback(SAVE_INTENT_FAILED).send().await
}

/// # Errors
///
/// See [`ApiCall::send`]; rejections fall back to [`SAVE_INTENT_FAILED`].
pub async fn update_intent(intent_id: i64, update: &IntentUpdate) -> Result<Intent, ApiError> {
    ApiCall::with_json(Method::Put, endpoints::intent(intent_id), update)?
        .fallback(SAVE_INTENT_FAILED)
        .send()
        .await
}

/// # Errors
///
/// See [`ApiCall::send`]; rejections fall back to [`DELETE_FAILED`].
pub async fn delete_intent(intent_id: i64) -> Result<MessageResponse, ApiError> {
    ApiCall::delete(endpoints::intent(intent_id)).fallback(DELETE_FAILED).send().await
}

/// Retrain with the server's default epoch count.
///
/// # Errors
///
/// See [`ApiCall::send`]; rejections fall back to [`RETRAIN_FAILED`].
pub async fn retrain() -> Result<RetrainResult, ApiError> {
    ApiCall::new(Method::Post, endpoints::retrain(None)).fallback(RETRAIN_FAILED).send().await
}

// =============================================================================
// TRAINING HISTORY
// =============================================================================

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn list_training_runs() -> Result<Vec<TrainingRunSummary>, ApiError> {
    ApiCall::get(endpoints::TRAINING_HISTORY).send().await
}

/// # Errors
///
/// See [`ApiCall::send`].
pub async fn fetch_training_run(run_id: i64) -> Result<TrainingRunDetail, ApiError> {
    ApiCall::get(endpoints::training_run(run_id)).send().await
}

/// # Errors
///
/// See [`ApiCall::send`]; rejections fall back to [`DELETE_FAILED`].
pub async fn delete_training_run(run_id: i64) -> Result<MessageResponse, ApiError> {
    ApiCall::delete(endpoints::training_run(run_id)).fallback(DELETE_FAILED).send().await
}
