//! Route guard decision.
//!
//! `INITIALIZING -> { DENIED(redirect), ALLOWED }`. The decision is taken from
//! a session snapshot before anything renders; the view layer turns
//! [`GuardState::Denied`] into a declarative redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::store::Session;

/// What a guarded view requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

/// Where a denied visitor is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

impl Redirect {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session not resolved yet; show the loading placeholder.
    Initializing,
    Denied(Redirect),
    Allowed,
}

impl GuardState {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }
}

/// Decide whether a view guarded by `access` may render for `session`.
#[must_use]
pub fn evaluate(access: Access, session: &Session) -> GuardState {
    if !session.is_resolved() {
        return GuardState::Initializing;
    }
    if !session.is_authenticated() {
        return GuardState::Denied(Redirect::Login);
    }
    match access {
        Access::Authenticated => GuardState::Allowed,
        Access::Admin if session.is_admin() => GuardState::Allowed,
        Access::Admin => GuardState::Denied(Redirect::Home),
    }
}

/// Landing page after a successful login.
#[must_use]
pub fn landing_path(user: &wire::User) -> &'static str {
    if user.is_admin() { "/admin" } else { "/" }
}
