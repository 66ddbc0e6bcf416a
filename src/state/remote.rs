//! Fetch status for page-local API data.
//!
//! Pages hold each list or record they show in a `RwSignal<Remote<T>>` and
//! render one of the three states; actions re-run [`load`] to re-fetch after
//! the backend has changed something.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::util::browser;

#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Edit loaded data in place; no-op while loading or failed.
    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(value) = self {
            f(value);
        }
    }
}

/// Run `fetch` and store its outcome in `target`.
///
/// Data already shown stays visible while a re-fetch is in flight.
pub fn load<T, F>(target: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    if target.with_untracked(|r| r.ready().is_none()) {
        target.set(Remote::Loading);
    }
    browser::spawn(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            leptos::logging::warn!("load failed: {e}");
        }
        target.set(Remote::from_result(result));
    });
}
