//! Session store: the single owner of "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app keeps one [`SessionStore`] in a reactive signal for the
//! lifetime of the page; the CLI builds one per invocation. Both inject their
//! own [`AuthBackend`] and [`TokenStore`].
//!
//! DESIGN
//! ======
//! `token` is the only persisted piece. `user` is re-derived from it through
//! `GET /auth/me` every time the store initializes, so a present `user`
//! always means the last resolution succeeded. `status` is transient and
//! starts at [`SessionStatus::Initializing`].
//!
//! ERROR HANDLING
//! ==============
//! A failed resolution is terminal for that attempt: the token is dropped
//! and the store resolves anonymous. Login and registration failures are
//! returned to the caller and leave the session untouched.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use wire::{ApiError, User};

use crate::backend::{AuthBackend, StorageError, TokenStore};
use crate::validate::{self, RegistrationForm, ValidationError};

/// Fallback shown when the backend rejects a login without a detail.
pub const LOGIN_FAILED: &str = "Login gagal";
/// Fallback shown when the backend rejects a registration without a detail.
pub const REGISTER_FAILED: &str = "Registrasi gagal";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Initializing,
    Resolved,
}

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    status: SessionStatus,
}

impl Session {
    /// Fresh session before the persisted token has been looked at.
    #[must_use]
    pub fn initializing() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { token: None, user: None, status: SessionStatus::Resolved }
    }

    #[must_use]
    pub fn signed_in(token: String, user: User) -> Self {
        Self { token: Some(token), user: Some(user), status: SessionStatus::Resolved }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == SessionStatus::Resolved
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Failure of a session operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Text to show next to the form that failed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::Validation(err) => err.to_string(),
            Self::Storage(err) => err.to_string(),
        }
    }
}

/// Session state plus the backend and token persistence it is resolved with.
#[derive(Clone, Debug)]
pub struct SessionStore<B, S> {
    backend: B,
    tokens: S,
    session: Session,
}

impl<B: AuthBackend, S: TokenStore> SessionStore<B, S> {
    /// A store in [`SessionStatus::Initializing`]; call [`Self::initialize`] next.
    pub fn new(backend: B, tokens: S) -> Self {
        Self { backend, tokens, session: Session::initializing() }
    }

    /// Replace the session snapshot, keeping backend and token store.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Restore the session from the persisted token.
    ///
    /// Always ends resolved. A token the backend rejects, for any reason, is
    /// removed from storage.
    pub async fn initialize(&mut self) {
        let Some(token) = self.tokens.load() else {
            log::info!("session: no stored token");
            self.session = Session::anonymous();
            return;
        };
        match self.backend.current_user(&token).await {
            Ok(user) => {
                log::info!("session: resolved user_id={} role={:?}", user.id, user.role);
                self.session = Session::signed_in(token, user);
            }
            Err(err) => {
                log::warn!("session: stored token rejected: {err}");
                if let Err(err) = self.tokens.clear() {
                    log::warn!("session: {err}");
                }
                self.session = Session::anonymous();
            }
        }
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// Returns the signed-in profile so the caller can pick the landing page.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] with the backend's message (or
    /// [`LOGIN_FAILED`]) on rejection, [`SessionError::Validation`] for blank
    /// fields and [`SessionError::Storage`] if the token cannot be saved.
    /// The session is unchanged on error.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, SessionError> {
        let request = validate::login_request(email, password)?;
        let response = self.backend.login(&request).await.map_err(|err| with_fallback(err, LOGIN_FAILED))?;
        self.tokens.save(&response.access_token)?;
        log::info!("session: logged in user_id={}", response.user.id);
        self.session = Session::signed_in(response.access_token, response.user.clone());
        Ok(response.user)
    }

    /// Create a visitor account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] with the backend's message (or
    /// [`REGISTER_FAILED`]) on rejection.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        whatsapp: Option<&str>,
    ) -> Result<User, SessionError> {
        let request = wire::RegisterRequest {
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            whatsapp: whatsapp.map(str::to_owned),
        };
        let user = self.backend.register(&request).await.map_err(|err| with_fallback(err, REGISTER_FAILED))?;
        log::info!("session: registered user_id={}", user.id);
        Ok(user)
    }

    /// Validate a registration form, then register.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Validation`] without touching the network when
    /// the form is rejected locally, otherwise as [`Self::register`].
    pub async fn register_form(&self, form: &RegistrationForm) -> Result<User, SessionError> {
        let request = form.validate()?;
        self.register(&request.full_name, &request.email, &request.password, request.whatsapp.as_deref())
            .await
    }

    /// Forget the token and user. No network call.
    ///
    /// The store goes back to initializing, so the next guarded view runs
    /// [`Self::initialize`] again and resolves anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the persisted token could not be
    /// removed. The in-memory session is reset either way.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.session = Session::initializing();
        self.tokens.clear().map_err(|err| {
            log::warn!("session: logout left a persisted token: {err}");
            SessionError::from(err)
        })?;
        log::info!("session: logged out");
        Ok(())
    }

    /// Drop in-memory state. The persisted token survives.
    pub fn dispose(self) {
        log::debug!("session: disposed");
    }
}

fn with_fallback(err: ApiError, fallback: &str) -> ApiError {
    match err {
        ApiError::Server { status, detail } if detail.trim().is_empty() => {
            ApiError::Server { status, detail: fallback.to_owned() }
        }
        other => other,
    }
}
