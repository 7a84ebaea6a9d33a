//! Seams the session store is built on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implements these with `gloo-net` and `localStorage`, the CLI
//! with `reqwest` and a token file. Futures are not required to be `Send`
//! because browser fetch futures are not.

use std::cell::RefCell;
use std::rc::Rc;

use wire::{ApiError, LoginRequest, RegisterRequest, TokenResponse, User};

/// The three auth endpoints the session store talks to.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend {
    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with the backend's detail on rejection.
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with the backend's detail on rejection.
    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError>;

    /// `GET /auth/me` with `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer or transport failure means the token is unusable.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

/// Failure to persist or remove the bearer token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token storage unavailable: {0}")]
pub struct StorageError(pub String);

/// Persistence for the single bearer token.
pub trait TokenStore {
    /// Persisted token, if any. Blank values count as absent.
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the write.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process token store; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone().filter(|t| !t.trim().is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
