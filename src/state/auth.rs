//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is provided once by `App` and read by route guards, pages and
//! the chat widget. It is the single source of truth for "who is signed in and
//! as what role". Mutations go through the plain functions below so the same
//! logic runs against signals in the browser and against bare state in tests.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{Session, SessionStore};
use crate::config::ApiConfig;
use crate::net::api::auth as auth_api;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Account, Role};

/// Session snapshot plus the startup loading flag.
///
/// `is_loading` starts `true` and flips once stored data has been read, so
/// role-gated views never render against an unread session.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, is_loading: true }
    }
}

impl AuthState {
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn user(&self) -> Option<&Account> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Load the persisted session and end the loading phase.
pub fn initialize(state: &mut AuthState, store: &SessionStore) {
    state.session = store.restore();
    state.is_loading = false;
}

/// Persist and adopt a fresh session. The backend response is trusted as-is.
pub fn apply_login(state: &mut AuthState, store: &SessionStore, session: Session) {
    store.persist(&session);
    state.session = Some(session);
    state.is_loading = false;
}

/// Drop the session from memory and storage. Safe to call repeatedly.
pub fn apply_logout(state: &mut AuthState, store: &SessionStore) {
    store.clear();
    state.session = None;
    state.is_loading = false;
}

/// Replace the profile of the current session. Returns `false` when signed out.
pub fn apply_profile(state: &mut AuthState, store: &SessionStore, user: Account) -> bool {
    let Some(session) = state.session.as_mut() else {
        return false;
    };
    session.user = user;
    store.persist_user(&session.user);
    true
}

/// Context handle for the session; cheap to clone.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    store: SessionStore,
    config: ApiConfig,
}

impl AuthContext {
    pub fn new(store: SessionStore, config: ApiConfig) -> Self {
        Self { state: RwSignal::new(AuthState::default()), store, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Read the stored session. Called once the app mounts in the browser.
    pub fn initialize(&self) {
        let store = self.store.clone();
        self.state.update(|s| initialize(s, &store));
    }

    pub fn login(&self, token: String, user: Account, role: Role) {
        let store = self.store.clone();
        self.state
            .update(|s| apply_login(s, &store, Session { token, user, role }));
    }

    pub fn logout(&self) {
        let store = self.store.clone();
        self.state.update(|s| apply_logout(s, &store));
    }

    /// REST client carrying the current token, if any.
    pub fn api(&self) -> ApiClient {
        let token = self
            .state
            .with_untracked(|s| s.token().map(str::to_owned));
        ApiClient::new(&self.config).with_token(token)
    }

    /// Re-fetch the profile for the current role and store it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SignedOut`] without a session, otherwise whatever
    /// the profile call fails with. Failures are also logged.
    pub async fn refresh_profile(&self) -> Result<Account, ApiError> {
        let Some(role) = self.state.with_untracked(AuthState::role) else {
            return Err(ApiError::SignedOut);
        };
        match auth_api::fetch_profile(&self.api(), role).await {
            Ok(user) => {
                let store = self.store.clone();
                let stored = user.clone();
                self.state.update(|s| {
                    apply_profile(s, &store, stored);
                });
                Ok(user)
            }
            Err(e) => {
                leptos::logging::warn!("profile refresh failed: {e}");
                Err(e)
            }
        }
    }
}

/// Fetch the app-wide auth context.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
