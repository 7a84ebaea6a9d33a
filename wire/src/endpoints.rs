//! Endpoint paths relative to the API base URL (e.g. `http://localhost:8000/api`).
//!
//! Collection routes keep the backend's trailing slash (`/intents/`, `/chat/`)
//! so requests are not bounced through a redirect.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_ME: &str = "/auth/me";
pub const USERS_ADMINS: &str = "/auth/users/admins";
pub const USERS_REGULAR: &str = "/auth/users/regular";
pub const USERS_CREATE_ADMIN: &str = "/auth/users/admin";

pub const CHAT: &str = "/chat/";
pub const CHAT_NEW_DATA: &str = "/chat/new-data";
pub const CHAT_ASSIGN: &str = "/chat/assign";

pub const INTENTS: &str = "/intents/";
pub const TRAINING_HISTORY: &str = "/training/history";

/// Default page size of the chat history view.
pub const HISTORY_PAGE_SIZE: u32 = 20;

/// Join the configured base URL and an endpoint path.
#[must_use]
pub fn url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[must_use]
pub fn user(user_id: i64) -> String {
    format!("/auth/users/{user_id}")
}

#[must_use]
pub fn chat_history(limit: u32, offset: u64) -> String {
    format!("/chat/history?limit={limit}&offset={offset}")
}

#[must_use]
pub fn intent(intent_id: i64) -> String {
    format!("/intents/{intent_id}")
}

/// Retrain route; `epochs` is left to the server default when absent.
#[must_use]
pub fn retrain(epochs: Option<u32>) -> String {
    match epochs {
        Some(epochs) => format!("/intents/retrain?epochs={epochs}"),
        None => "/intents/retrain".to_owned(),
    }
}

#[must_use]
pub fn training_run(run_id: i64) -> String {
    format!("/training/history/{run_id}")
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
