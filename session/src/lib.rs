//! # session
//!
//! Client-side authentication session and role-gated routing for the PMB
//! dashboard.
//!
//! [`SessionStore`] is the single source of truth for "who is logged in". It
//! is constructed explicitly with an [`AuthBackend`] (HTTP) and a
//! [`TokenStore`] (persistence), so the browser app, the CLI and the tests
//! each inject their own. [`guard`] turns a session snapshot into a
//! render/redirect decision before any view is built.

pub mod backend;
pub mod guard;
pub mod store;
pub mod validate;

pub use backend::{AuthBackend, MemoryTokenStore, StorageError, TokenStore};
pub use guard::{Access, GuardState, Redirect, evaluate, landing_path};
pub use store::{LOGIN_FAILED, REGISTER_FAILED, Session, SessionError, SessionStatus, SessionStore};
pub use validate::{MIN_PASSWORD_LEN, RegistrationForm, ValidationError, admin_request, login_request};
