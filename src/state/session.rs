//! Admin session state: the gateway credential and current-user identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the process-wide singleton behind the route guard and every
//! authenticated API call. It is provided once from the app shell and is the
//! only writer of its own state; pages read it through context.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::state::persist::{self, CredentialStore};

/// Snapshot of the admin session.
///
/// `current_user` is the record the gateway returned at login, held as opaque
/// JSON — it is persisted and displayed but never interpreted here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub admin_key: Option<String>,
    pub current_user: Option<Value>,
}

impl SessionState {
    /// True iff the in-memory credential is a non-empty string. Recomputed on
    /// every call, never cached.
    pub fn is_authenticated(&self) -> bool {
        self.admin_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Replace both fields, writing both through to `store` when one is
    /// attached. The user record is stored as-is, without validation.
    pub fn set_auth(&mut self, key: &str, user: Value, store: Option<&dyn CredentialStore>) {
        if let Some(store) = store {
            store.set(persist::ADMIN_KEY, key);
            if let Ok(raw) = serde_json::to_string(&user) {
                store.set(persist::CURRENT_USER_KEY, &raw);
            }
        }
        self.admin_key = Some(key.to_owned());
        self.current_user = Some(user);
    }

    /// Empty both fields and drop the persisted keys. Idempotent.
    pub fn clear_auth(&mut self, store: Option<&dyn CredentialStore>) {
        if let Some(store) = store {
            store.remove(persist::ADMIN_KEY);
            store.remove(persist::CURRENT_USER_KEY);
        }
        self.admin_key = None;
        self.current_user = None;
    }
}

/// Rebuild session state from persisted values.
///
/// A malformed persisted user record is treated as absent rather than an
/// error; the credential still restores.
pub fn restored(store: &dyn CredentialStore) -> SessionState {
    let admin_key = store.get(persist::ADMIN_KEY).filter(|key| !key.is_empty());
    let current_user = store
        .get(persist::CURRENT_USER_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok());
    SessionState {
        admin_key,
        current_user,
    }
}

/// Process-wide session handle provided via context from the app shell.
///
/// Construction is context-aware: hydrate builds see the browser store and
/// restore persisted values eagerly; server rendering sees no store and
/// starts empty. The hydration repair closes the gap on the first
/// client-side navigation.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        let initial = persist::browser_store()
            .map(|store| restored(store.as_ref()))
            .unwrap_or_default();
        Self {
            state: RwSignal::new(initial),
        }
    }

    /// Reactive state for components and the route guard.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// The credential for `Authorization` headers; empty when logged out.
    pub fn admin_key(&self) -> String {
        self.state
            .with_untracked(|state| state.admin_key.clone().unwrap_or_default())
    }

    /// Store the credential and user record returned by the gateway.
    pub fn set_auth(&self, key: &str, user: Value) {
        let store = persist::browser_store();
        self.state
            .update(|state| state.set_auth(key, user, store.as_deref()));
    }

    /// Log out: clear the in-memory and persisted session. Navigating back to
    /// the login screen is the caller's move.
    pub fn clear_auth(&self) {
        let store = persist::browser_store();
        self.state
            .update(|state| state.clear_auth(store.as_deref()));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
