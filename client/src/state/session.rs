//! Browser session: the shared [`SessionStore`] behind a signal.
//!
//! DESIGN
//! ======
//! Async operations take a snapshot of the store, run against it, then write
//! it back. Overlapping operations are not serialized; the last one to finish
//! wins.

use leptos::prelude::*;
use session::{RegistrationForm, SessionError, SessionStore};
use wire::User;

use crate::net::api::HttpAuthBackend;
use crate::util::token_storage::BrowserTokenStore;

pub type ClientSession = SessionStore<HttpAuthBackend, BrowserTokenStore>;

/// A fresh store, still initializing.
pub fn new_session() -> ClientSession {
    SessionStore::new(HttpAuthBackend, BrowserTokenStore)
}

/// Resolve the persisted token into a user.
pub async fn initialize(session: RwSignal<ClientSession>) {
    let mut store = session.get_untracked();
    store.initialize().await;
    session.set(store);
}

/// # Errors
///
/// See [`SessionStore::login`].
pub async fn login(session: RwSignal<ClientSession>, email: &str, password: &str) -> Result<User, SessionError> {
    let mut store = session.get_untracked();
    let user = store.login(email, password).await?;
    session.set(store);
    Ok(user)
}

/// # Errors
///
/// See [`SessionStore::register_form`].
pub async fn register(session: RwSignal<ClientSession>, form: &RegistrationForm) -> Result<User, SessionError> {
    let store = session.get_untracked();
    store.register_form(form).await
}

/// # Errors
///
/// See [`SessionStore::logout`]. The signal is reset even on error.
pub fn logout(session: RwSignal<ClientSession>) -> Result<(), SessionError> {
    session.try_update(SessionStore::logout).unwrap_or(Ok(()))
}

/// Current bearer token, for admin-only data calls.
pub fn token(session: RwSignal<ClientSession>) -> Option<String> {
    session.with_untracked(|s| s.token().map(str::to_owned))
}
