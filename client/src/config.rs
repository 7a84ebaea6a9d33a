//! Build-time configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `PMB_API_URL` was not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Base URL every REST call is resolved against.
pub fn api_base() -> &'static str {
    resolve(option_env!("PMB_API_URL"))
}

fn resolve(configured: Option<&'static str>) -> &'static str {
    configured.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE)
}
