use super::*;
use crate::state::persist::MemoryStore;
use serde_json::json;

// =============================================================
// Derived authentication flag
// =============================================================

#[test]
fn default_state_is_not_authenticated() {
    assert!(!SessionState::default().is_authenticated());
}

#[test]
fn empty_credential_is_not_authenticated() {
    let state = SessionState {
        admin_key: Some(String::new()),
        current_user: None,
    };
    assert!(!state.is_authenticated());
}

#[test]
fn non_empty_credential_is_authenticated_without_user() {
    let state = SessionState {
        admin_key: Some("key-123".to_owned()),
        current_user: None,
    };
    assert!(state.is_authenticated());
}

// =============================================================
// set_auth write-through
// =============================================================

#[test]
fn set_auth_replaces_both_fields() {
    let mut state = SessionState::default();
    state.set_auth("key-123", json!({ "username": "root" }), None);
    assert_eq!(state.admin_key.as_deref(), Some("key-123"));
    assert_eq!(state.current_user, Some(json!({ "username": "root" })));
    assert!(state.is_authenticated());
}

#[test]
fn set_auth_writes_both_values_through_to_the_store() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.set_auth("key-123", json!({ "username": "root" }), Some(&store));

    assert_eq!(store.get(crate::state::persist::ADMIN_KEY).as_deref(), Some("key-123"));
    let raw = store.get(crate::state::persist::CURRENT_USER_KEY).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, json!({ "username": "root" }));
}

#[test]
fn set_auth_without_store_touches_memory_only() {
    let mut state = SessionState::default();
    state.set_auth("key-123", json!({}), None);
    assert!(state.is_authenticated());
}

// =============================================================
// clear_auth idempotence
// =============================================================

#[test]
fn clear_auth_empties_state_and_storage() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.set_auth("key-123", json!({ "id": 1 }), Some(&store));

    state.clear_auth(Some(&store));

    assert_eq!(state, SessionState::default());
    assert_eq!(store.get(crate::state::persist::ADMIN_KEY), None);
    assert_eq!(store.get(crate::state::persist::CURRENT_USER_KEY), None);
}

#[test]
fn clear_auth_twice_is_a_no_op_the_second_time() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.set_auth("key-123", json!({ "id": 1 }), Some(&store));

    state.clear_auth(Some(&store));
    state.clear_auth(Some(&store));

    assert_eq!(state, SessionState::default());
    assert_eq!(store.get(crate::state::persist::ADMIN_KEY), None);
}

// =============================================================
// Eager restore at construction
// =============================================================

#[test]
fn restored_rebuilds_full_state_from_storage() {
    let store = MemoryStore::default();
    store.set(crate::state::persist::ADMIN_KEY, "key-123");
    store.set(crate::state::persist::CURRENT_USER_KEY, "{\"id\":1}");

    let state = restored(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.current_user, Some(json!({ "id": 1 })));
}

#[test]
fn restored_treats_empty_persisted_credential_as_absent() {
    let store = MemoryStore::default();
    store.set(crate::state::persist::ADMIN_KEY, "");

    let state = restored(&store);
    assert_eq!(state.admin_key, None);
    assert!(!state.is_authenticated());
}

#[test]
fn restored_tolerates_a_malformed_user_record() {
    let store = MemoryStore::default();
    store.set(crate::state::persist::ADMIN_KEY, "key-123");
    store.set(crate::state::persist::CURRENT_USER_KEY, "not json");

    let state = restored(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.current_user, None);
}

#[test]
fn restored_from_an_empty_store_is_default() {
    let store = MemoryStore::default();
    assert_eq!(restored(&store), SessionState::default());
}
