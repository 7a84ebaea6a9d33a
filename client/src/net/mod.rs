//! Networking: REST calls against the PMB `/api` backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds every request as plain data and only the final send is
//! browser-specific, so request shapes and response decoding are tested
//! natively.

pub mod api;
