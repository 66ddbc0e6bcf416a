//! Endpoint configuration for the REST API and the chat push channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is baked in at build time from `ELECTROCARE_API_URL`. The push-channel base
//! is derived from it by stripping the `/api` suffix, matching how the backend
//! mounts its socket server at the site root.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base URL used when `ELECTROCARE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

const API_SUFFIX: &str = "/api";

/// Resolved endpoint configuration, provided to the view tree as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL for REST calls, without a trailing slash.
    pub api_base: String,
    /// Base URL for the push channel, without a trailing slash.
    pub socket_base: String,
}

impl ApiConfig {
    /// Build config from an explicit API base URL.
    pub fn from_api_url(api_url: &str) -> Self {
        let api_base = api_url.trim().trim_end_matches('/').to_owned();
        let socket_base = socket_base_from_api(&api_base);
        Self { api_base, socket_base }
    }

    /// Build config from the `ELECTROCARE_API_URL` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_api_url(option_env!("ELECTROCARE_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Derive the push-channel origin from the API base URL.
pub fn socket_base_from_api(api_base: &str) -> String {
    let trimmed = api_base.trim_end_matches('/');
    trimmed
        .strip_suffix(API_SUFFIX)
        .unwrap_or(trimmed)
        .to_owned()
}
