use std::sync::Arc;

use super::*;

fn account() -> Account {
    Account {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        ..Account::default()
    }
}

fn session() -> Session {
    Session { token: "tok".to_owned(), user: account(), role: Role::User }
}

fn store() -> (SessionStore, Arc<MemoryStorage>) {
    let memory = Arc::new(MemoryStorage::default());
    (SessionStore::new(memory.clone()), memory)
}

fn seed(memory: &MemoryStorage, token: Option<&str>, user: Option<&str>, role: Option<&str>) {
    for (key, value) in [(TOKEN_KEY, token), (USER_KEY, user), (ROLE_KEY, role)] {
        if let Some(value) = value {
            memory.set(key, value);
        }
    }
}

// =============================================================
// parse_stored
// =============================================================

#[test]
fn parse_stored_empty_when_nothing_present() {
    assert_eq!(parse_stored(None, None, None), StoredSession::Empty);
}

#[test]
fn parse_stored_valid_round_trip() {
    let user = serde_json::to_string(&account()).unwrap();
    assert_eq!(parse_stored(Some("tok"), Some(user.as_str()), Some("user")), StoredSession::Valid(session()));
}

#[test]
fn parse_stored_flags_partial_and_malformed_values() {
    let user = serde_json::to_string(&account()).unwrap();
    let cases: [(Option<&str>, Option<&str>, Option<&str>); 7] = [
        (Some("tok"), None, None),
        (None, Some(user.as_str()), Some("user")),
        (Some("tok"), Some(user.as_str()), None),
        (Some("  "), Some(user.as_str()), Some("user")),
        (Some("tok"), Some("{not json"), Some("user")),
        (Some("tok"), Some("\"just a string\""), Some("admin")),
        (Some("tok"), Some(user.as_str()), Some("root")),
    ];
    for (token, user, role) in cases {
        assert_eq!(parse_stored(token, user, role), StoredSession::Corrupt, "{token:?} {user:?} {role:?}");
    }
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn restore_returns_none_without_touching_empty_storage() {
    let (store, memory) = store();
    assert_eq!(store.restore(), None);
    assert!(memory.is_empty());
}

#[test]
fn persist_then_restore_returns_same_session() {
    let (store, memory) = store();
    store.persist(&session());
    assert_eq!(memory.len(), 3);
    assert_eq!(memory.get(ROLE_KEY).as_deref(), Some("user"));
    assert_eq!(store.restore(), Some(session()));
}

#[test]
fn restore_clears_all_keys_for_any_malformed_combination() {
    let malformed: [(Option<&str>, Option<&str>, Option<&str>); 5] = [
        (Some("tok"), Some("{{{"), Some("user")),
        (Some("tok"), Some("null"), Some("technician")),
        (Some("tok"), Some(r#"{"id":"u1","name":"A","email":"a@b.co"}"#), Some("owner")),
        (None, Some(r#"{"id":"u1","name":"A","email":"a@b.co"}"#), Some("user")),
        (Some(""), None, Some("admin")),
    ];
    for (token, user, role) in malformed {
        let (store, memory) = store();
        seed(&memory, token, user, role);
        assert_eq!(store.restore(), None);
        assert!(memory.is_empty(), "keys left behind for {token:?} {user:?} {role:?}");
    }
}

#[test]
fn clear_is_idempotent() {
    let (store, memory) = store();
    store.persist(&session());
    store.clear();
    store.clear();
    assert!(memory.is_empty());
}

#[test]
fn persist_user_overwrites_only_user_key() {
    let (store, memory) = store();
    store.persist(&session());
    let mut updated = account();
    updated.name = "Asha K".to_owned();
    store.persist_user(&updated);
    let restored = store.restore().expect("session");
    assert_eq!(restored.user.name, "Asha K");
    assert_eq!(restored.token, "tok");
    assert_eq!(memory.len(), 3);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let storage = BrowserStorage;
    storage.set(TOKEN_KEY, "tok");
    assert_eq!(storage.get(TOKEN_KEY), None);
    storage.remove(TOKEN_KEY);
}
