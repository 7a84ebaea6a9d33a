//! `reqwest` transport for the PMB REST API.
//!
//! Every call resolves to `Result<T, ApiError>` the same way the browser
//! client does: non-2xx answers become [`ApiError::Server`] carrying the
//! backend's `detail`, connection failures [`ApiError::Transport`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use session::{AuthBackend, LOGIN_FAILED, REGISTER_FAILED};
use wire::endpoints;
use wire::error::REQUEST_FAILED;
use wire::{ApiError, LoginRequest, RegisterRequest, TokenResponse, User};

#[derive(Clone, Debug)]
pub struct Api {
    client: reqwest::Client,
    base: String,
}

impl Api {
    pub fn new(base: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Send one request and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when the server is unreachable,
    /// [`ApiError::Server`] for non-2xx answers and [`ApiError::Decode`] when a
    /// success body does not match `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<&impl Serialize>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = endpoints::url(&self.base, path);
        tracing::debug!(%method, %url, "api request");
        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, endpoints::bearer(token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "api request failed");
            ApiError::Transport(e.to_string())
        })?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(status, &text, fallback)
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<T, ApiError> {
        self.request(Method::GET, path, bearer, None::<&()>, REQUEST_FAILED).await
    }
}

/// Map a raw HTTP answer to the caller's type.
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body, fallback));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// [`AuthBackend`] over [`Api`].
#[derive(Clone, Debug)]
pub struct ReqwestAuthBackend {
    api: Api,
}

impl ReqwestAuthBackend {
    pub fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for ReqwestAuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.api.request(Method::POST, endpoints::AUTH_LOGIN, None, Some(request), LOGIN_FAILED).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        self.api.request(Method::POST, endpoints::AUTH_REGISTER, None, Some(request), REGISTER_FAILED).await
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.api.get(endpoints::AUTH_ME, Some(token)).await
    }
}
