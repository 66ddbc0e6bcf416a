//! Durable session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads through three `localStorage` keys that are
//! always written and cleared together. Reads are defensive: any partial or
//! unparsable combination is treated as corruption, wiped, and reported as
//! "no session".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::{Account, Role};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "role";

/// Key/value backend for session persistence.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Every operation is a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// The signed-in identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Account,
    pub role: Role,
}

/// Outcome of reading the three session keys.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredSession {
    /// No key is present.
    Empty,
    Valid(Session),
    /// Some keys are present but they do not form a session.
    Corrupt,
}

/// Classify raw stored values without touching storage.
pub fn parse_stored(token: Option<&str>, user: Option<&str>, role: Option<&str>) -> StoredSession {
    if token.is_none() && user.is_none() && role.is_none() {
        return StoredSession::Empty;
    }
    let (Some(token), Some(user), Some(role)) = (token, user, role) else {
        return StoredSession::Corrupt;
    };
    if token.trim().is_empty() {
        return StoredSession::Corrupt;
    }
    let Ok(role) = role.parse::<Role>() else {
        return StoredSession::Corrupt;
    };
    let Ok(user) = serde_json::from_str::<Account>(user) else {
        return StoredSession::Corrupt;
    };
    StoredSession::Valid(Session { token: token.to_owned(), user, role })
}

/// Reads and writes the session through an injected [`SessionStorage`].
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Read the stored session, wiping all keys if they are corrupt.
    pub fn restore(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY);
        let user = self.storage.get(USER_KEY);
        let role = self.storage.get(ROLE_KEY);
        match parse_stored(token.as_deref(), user.as_deref(), role.as_deref()) {
            StoredSession::Valid(session) => Some(session),
            StoredSession::Empty => None,
            StoredSession::Corrupt => {
                self.clear();
                None
            }
        }
    }

    pub fn persist(&self, session: &Session) {
        self.storage.set(TOKEN_KEY, &session.token);
        self.persist_user(&session.user);
        self.storage.set(ROLE_KEY, session.role.as_str());
    }

    pub fn persist_user(&self, user: &Account) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &raw);
        }
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.storage.remove(ROLE_KEY);
    }
}
