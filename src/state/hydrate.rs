//! SSR-hydration repair for the admin session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell renders first on the server, where sessionStorage is
//! unreachable, so the session context starts empty there. The route guard
//! calls `reconcile` on each client-side navigation to restore persisted
//! credentials before any redirect decision is made; without it, an admin
//! with a valid persisted session would bounce to the login screen on the
//! first client render.

#[cfg(test)]
#[path = "hydrate_test.rs"]
mod hydrate_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::state::persist::{self, CredentialStore};
use crate::state::session::{Session, SessionState};

/// Decide whether persisted values can repair an unauthenticated state.
///
/// Returns the `(key, user)` pair to apply, or `None` when the state is
/// already authenticated, when the store lacks a non-empty credential or a
/// user record, or when the record fails to parse. A parse failure abandons
/// the repair for this pass and is logged; the session stays unauthenticated
/// rather than failing navigation.
pub fn restorable(state: &SessionState, store: &dyn CredentialStore) -> Option<(String, Value)> {
    if state.is_authenticated() {
        return None;
    }
    let key = store.get(persist::ADMIN_KEY).filter(|key| !key.is_empty())?;
    let raw = store.get(persist::CURRENT_USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some((key, user)),
        Err(err) => {
            log::error!("failed to restore session: {err}");
            None
        }
    }
}

/// Run the repair against the live session.
///
/// No-op in the server context (no store) and whenever nothing restorable is
/// persisted, so it is safe to call on every navigation.
pub fn reconcile(session: &Session) {
    let Some(store) = persist::browser_store() else {
        return;
    };
    let current = session.state().get_untracked();
    if let Some((key, user)) = restorable(&current, store.as_ref()) {
        session.set_auth(&key, user);
    }
}
