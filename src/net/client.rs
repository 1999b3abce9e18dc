//! Shared API client and its authorization pipeline.
//!
//! ARCHITECTURE
//! ============
//! One configured `reqwest::Client` serves every wrapper module. Two hooks
//! apply uniformly: outgoing requests gain `Authorization: Bearer <token>`
//! whenever a token is known, and any 401 response evicts the session and
//! redirects to the login screen before the error reaches the caller.
//!
//! TRADE-OFFS
//! ==========
//! Eviction is global, not request-scoped: one 401 invalidates the session
//! other in-flight requests assumed. Those requests are neither retried nor
//! cancelled — each observes its own failure — but eviction takes the token
//! atomically, so only one of them performs the redirect.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::{Arc, Mutex, PoisonError};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::ApiError;
use crate::navigate::Navigator;
use crate::session::SessionStore;
use crate::storage::Storage;

/// Application path the 401 handler redirects to.
const LOGIN_PATH: &str = "/login";

/// Shared HTTP client for every API wrapper. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    /// Header value installed by login/register, cleared by logout/eviction.
    /// Redundant with the per-request token lookup; kept so a caller that
    /// swaps storage backends mid-session still sends the right credential.
    default_authorization: Mutex<Option<String>>,
}

impl ApiClient {
    /// Build the shared client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        config: &Config,
        storage: Arc<dyn Storage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url.clone(),
                session: SessionStore::new(storage),
                navigator,
                default_authorization: Mutex::new(None),
            }),
        })
    }

    /// The session store this client reads tokens from and evicts into.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Configured API origin, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Install `token` as the client-wide Authorization credential.
    pub fn set_default_authorization(&self, token: &str) {
        *self.lock_default_authorization() = Some(format!("Bearer {token}"));
    }

    /// Drop the client-wide Authorization credential.
    pub fn clear_default_authorization(&self) {
        *self.lock_default_authorization() = None;
    }

    fn lock_default_authorization(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.inner.default_authorization.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; all verbs share the same failure surface.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path), path).await
    }

    /// `GET path?query`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query), path).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body), path).await
    }

    /// `POST path` without a body (logout and friends).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path), path).await
    }

    /// `POST path` with a multipart body (file uploads).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path).multipart(form), path).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body), path).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, path), path).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner.http.request(method, self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Request hook: attach the bearer credential when one is known.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .lock_default_authorization()
            .clone()
            .or_else(|| self.inner.session.token().map(|token| format!("Bearer {token}")));
        match bearer {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            let message = extract_message(response).await;
            return Err(ApiError::Unauthorized { path: path.to_owned(), message });
        }
        if !status.is_success() {
            let message = extract_message(response).await;
            return Err(ApiError::Status { path: path.to_owned(), status: status.as_u16(), message });
        }

        let body = response.text().await?;
        if body.is_empty() {
            // Some mutation endpoints answer 204/empty; map that to JSON null
            // so `Value` targets still decode.
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Response hook for 401: evict the session and head to the login screen.
    ///
    /// The eviction is an atomic token take, so when several in-flight
    /// requests all come back 401 only the first one redirects; a 401 on a
    /// request that never carried a token leaves everything untouched.
    fn handle_unauthorized(&self) {
        if self.inner.session.evict() {
            self.clear_default_authorization();
            tracing::warn!("session rejected by the API; redirecting to login");
            self.inner.navigator.navigate(LOGIN_PATH);
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.inner.base_url).finish()
    }
}

/// Pull the `message` field out of a JSON error body, when there is one.
async fn extract_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: Value = serde_json::from_str(&body).ok()?;
    value.get("message")?.as_str().map(str::to_owned)
}
