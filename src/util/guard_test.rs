use super::*;
use crate::state::persist::{self, CredentialStore, MemoryStore};
use crate::state::session::SessionState;
use serde_json::json;

#[test]
fn login_path_while_authenticated_redirects_home() {
    assert_eq!(evaluate(true, LOGIN_PATH), GuardOutcome::RedirectToHome);
}

#[test]
fn login_path_while_unauthenticated_is_allowed() {
    assert_eq!(evaluate(false, LOGIN_PATH), GuardOutcome::Allow);
}

#[test]
fn protected_path_while_authenticated_is_allowed() {
    assert_eq!(evaluate(true, HOME_PATH), GuardOutcome::Allow);
    assert_eq!(evaluate(true, "/users"), GuardOutcome::Allow);
}

#[test]
fn protected_path_while_unauthenticated_redirects_to_login() {
    assert_eq!(evaluate(false, HOME_PATH), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate(false, "/models"), GuardOutcome::RedirectToLogin);
}

#[test]
fn login_then_logout_walks_the_expected_redirects() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();

    state.set_auth("key-123", json!({ "username": "root" }), Some(&store));
    assert!(state.is_authenticated());
    assert_eq!(
        evaluate(state.is_authenticated(), LOGIN_PATH),
        GuardOutcome::RedirectToHome
    );

    state.clear_auth(Some(&store));
    assert!(!state.is_authenticated());
    assert_eq!(store.get(persist::ADMIN_KEY), None);
    assert_eq!(store.get(persist::CURRENT_USER_KEY), None);
    assert_eq!(
        evaluate(state.is_authenticated(), HOME_PATH),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn hydration_repair_feeds_the_guard_decision() {
    let store = MemoryStore::default();
    store.set(persist::ADMIN_KEY, "abc");
    store.set(persist::CURRENT_USER_KEY, "{\"id\":1}");

    // First client pass after SSR: state starts empty.
    let mut state = SessionState::default();
    assert_eq!(
        evaluate(state.is_authenticated(), "/users"),
        GuardOutcome::RedirectToLogin
    );

    if let Some((key, user)) = crate::state::hydrate::restorable(&state, &store) {
        state.set_auth(&key, user, Some(&store));
    }
    assert_eq!(
        evaluate(state.is_authenticated(), "/users"),
        GuardOutcome::Allow
    );
}
