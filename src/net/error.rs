//! Error type returned by every REST wrapper.
//!
//! ERROR HANDLING
//! ==============
//! Wrappers never retry or swallow failures; each call site decides whether
//! to toast, redirect or ignore. The backend reports failures as JSON bodies
//! with a `message` (or `error`) field, which is lifted into
//! [`ApiError::Status`] so pages can show it verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only issued from the browser build.
    #[error("not available on server")]
    Unavailable,
    /// The call needs a session and none is active.
    #[error("not signed in")]
    SignedOut,
}

impl ApiError {
    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a status error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status { status, message: error_message_from_body(status, body) }
    }
}

/// Extract the server's human-readable error message from a response body.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(serde_json::Value::as_str)
        })
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map_or_else(|| format!("request failed: {status}"), str::to_owned)
}
