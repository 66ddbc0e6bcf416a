use std::sync::Arc;

use super::*;
use crate::state::session::{MemoryStorage, ROLE_KEY, SessionStorage, TOKEN_KEY, USER_KEY};

fn account(name: &str) -> Account {
    Account {
        id: "t1".to_owned(),
        name: name.to_owned(),
        email: "ravi@example.com".to_owned(),
        ..Account::default()
    }
}

fn store() -> (SessionStore, Arc<MemoryStorage>) {
    let memory = Arc::new(MemoryStorage::default());
    (SessionStore::new(memory.clone()), memory)
}

fn session() -> Session {
    Session { token: "tok".to_owned(), user: account("Ravi"), role: Role::Technician }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.is_loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
    assert_eq!(state.role(), None);
}

#[test]
fn initialize_without_stored_session_ends_loading() {
    let (store, _) = store();
    let mut state = AuthState::default();
    initialize(&mut state, &store);
    assert!(!state.is_loading);
    assert!(state.session.is_none());
}

#[test]
fn initialize_restores_persisted_session() {
    let (store, _) = store();
    store.persist(&session());
    let mut state = AuthState::default();
    initialize(&mut state, &store);
    assert_eq!(state.role(), Some(Role::Technician));
    assert_eq!(state.token(), Some("tok"));
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Ravi"));
}

#[test]
fn initialize_discards_corrupt_storage() {
    let (store, memory) = store();
    memory.set(TOKEN_KEY, "tok");
    memory.set(ROLE_KEY, "technician");
    memory.set(USER_KEY, "{broken");
    let mut state = AuthState::default();
    initialize(&mut state, &store);
    assert!(!state.is_authenticated());
    assert!(memory.is_empty());
}

// =============================================================
// login / logout / profile
// =============================================================

#[test]
fn login_persists_all_three_keys() {
    let (store, memory) = store();
    let mut state = AuthState::default();
    apply_login(&mut state, &store, session());
    assert!(state.is_authenticated());
    assert!(!state.is_loading);
    assert_eq!(memory.get(TOKEN_KEY).as_deref(), Some("tok"));
    assert_eq!(memory.get(ROLE_KEY).as_deref(), Some("technician"));
    assert!(memory.get(USER_KEY).is_some());
}

#[test]
fn login_then_logout_leaves_no_keys() {
    let (store, memory) = store();
    let mut state = AuthState::default();
    apply_login(&mut state, &store, session());
    apply_logout(&mut state, &store);
    assert!(!state.is_authenticated());
    assert!(memory.is_empty());
}

#[test]
fn logout_is_idempotent() {
    let (store, memory) = store();
    let mut state = AuthState::default();
    apply_logout(&mut state, &store);
    apply_logout(&mut state, &store);
    assert!(state.session.is_none());
    assert!(memory.is_empty());
}

#[test]
fn profile_update_replaces_user_and_storage() {
    let (store, _) = store();
    let mut state = AuthState::default();
    apply_login(&mut state, &store, session());
    assert!(apply_profile(&mut state, &store, account("Ravi Kumar")));
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Ravi Kumar"));

    let restored = store.restore().unwrap();
    assert_eq!(restored.user.name, "Ravi Kumar");
    assert_eq!(restored.token, "tok");
}

#[test]
fn profile_update_without_session_is_rejected() {
    let (store, memory) = store();
    let mut state = AuthState::default();
    assert!(!apply_profile(&mut state, &store, account("Nobody")));
    assert!(memory.is_empty());
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_login_drives_signal_and_client_token() {
    let (store, memory) = store();
    let ctx = AuthContext::new(store, ApiConfig::default());
    ctx.initialize();
    assert!(!ctx.state.get_untracked().is_loading);
    assert_eq!(ctx.api().token(), None);

    ctx.login("abc".to_owned(), account("Ravi"), Role::Technician);
    assert_eq!(ctx.api().authorization().as_deref(), Some("Bearer abc"));

    ctx.logout();
    assert!(!ctx.state.get_untracked().is_authenticated());
    assert!(memory.is_empty());
}
