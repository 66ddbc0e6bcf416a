//! HTTP request descriptors and the bearer-token REST client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! the backend is only reachable from the browser session.
//!
//! DESIGN
//! ======
//! Wrappers in `net::api` build an [`ApiRequest`] with a pure function and hand
//! it to [`ApiClient::send`]. Keeping method/path/body construction pure makes
//! the endpoint table testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ApiConfig;

/// HTTP method used by an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described REST call relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// Request payloads are plain structs with string keys, which always
    /// serialize; a failure degrades to a `null` body rather than a panic.
    #[must_use]
    pub fn json<B: Serialize>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_value(body).unwrap_or(serde_json::Value::Null));
        self
    }
}

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// REST client bound to one base URL and, optionally, one session token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Anonymous client for the configured API base.
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.api_base.clone(), token: None }
    }

    /// Attach a bearer token; empty tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// `Authorization` header value, if the client carries a token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Execute a request and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response arrives,
    /// [`ApiError::Status`] for non-2xx responses, [`ApiError::Decode`] when
    /// the body does not match `T`, and [`ApiError::Unavailable`] outside the
    /// browser.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.execute(&request).await?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Execute a request whose response body is irrelevant.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`], minus decode failures.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.execute(&request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn execute(&self, request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }
        Ok(resp)
    }
}
