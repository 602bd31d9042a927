use super::*;
use crate::state::persist::MemoryStore;
use serde_json::json;

fn seeded(key: &str, user: &str) -> MemoryStore {
    let store = MemoryStore::default();
    store.set(persist::ADMIN_KEY, key);
    store.set(persist::CURRENT_USER_KEY, user);
    store
}

#[test]
fn repairs_an_empty_state_from_persisted_values() {
    let store = seeded("abc", "{\"id\":1}");
    let restored = restorable(&SessionState::default(), &store);
    assert_eq!(restored, Some(("abc".to_owned(), json!({ "id": 1 }))));
}

#[test]
fn no_repair_when_already_authenticated() {
    let store = seeded("abc", "{\"id\":1}");
    let state = SessionState {
        admin_key: Some("other".to_owned()),
        current_user: None,
    };
    assert_eq!(restorable(&state, &store), None);
}

#[test]
fn no_repair_without_a_persisted_credential() {
    let store = MemoryStore::default();
    store.set(persist::CURRENT_USER_KEY, "{\"id\":1}");
    assert_eq!(restorable(&SessionState::default(), &store), None);
}

#[test]
fn no_repair_with_an_empty_persisted_credential() {
    let store = seeded("", "{\"id\":1}");
    assert_eq!(restorable(&SessionState::default(), &store), None);
}

#[test]
fn no_repair_without_a_persisted_user_record() {
    let store = MemoryStore::default();
    store.set(persist::ADMIN_KEY, "abc");
    assert_eq!(restorable(&SessionState::default(), &store), None);
}

#[test]
fn malformed_user_record_abandons_the_repair() {
    let store = seeded("abc", "not json");
    let state = SessionState::default();
    assert_eq!(restorable(&state, &store), None);
    assert!(!state.is_authenticated());
}
