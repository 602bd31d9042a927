use super::*;

#[test]
fn get_on_missing_key_returns_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get(ADMIN_KEY), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = MemoryStore::default();
    store.set(ADMIN_KEY, "key-123");
    assert_eq!(store.get(ADMIN_KEY), Some("key-123".to_owned()));
}

#[test]
fn set_overwrites_previous_value() {
    let store = MemoryStore::default();
    store.set(CURRENT_USER_KEY, "{\"id\":1}");
    store.set(CURRENT_USER_KEY, "{\"id\":2}");
    assert_eq!(store.get(CURRENT_USER_KEY), Some("{\"id\":2}".to_owned()));
}

#[test]
fn remove_drops_the_value() {
    let store = MemoryStore::default();
    store.set(ADMIN_KEY, "key-123");
    store.remove(ADMIN_KEY);
    assert_eq!(store.get(ADMIN_KEY), None);
}

#[test]
fn remove_on_missing_key_is_a_no_op() {
    let store = MemoryStore::default();
    store.remove(ADMIN_KEY);
    assert_eq!(store.get(ADMIN_KEY), None);
}
