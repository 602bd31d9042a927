//! Per-tab credential persistence over browser `sessionStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session state and the hydration repair share this one storage seam instead
//! of probing browser globals independently. `sessionStorage` is only
//! reachable in hydrate builds; server rendering gets no store at all and
//! must never attempt access.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::rc::Rc;

/// Storage key holding the raw admin API key.
pub const ADMIN_KEY: &str = "conduit_admin_key";
/// Storage key holding the JSON-serialized current-user record.
pub const CURRENT_USER_KEY: &str = "conduit_current_user";

/// Synchronous key-value persistence for the two session values.
///
/// `get` on a missing key returns `None`, never an error. Writes are
/// best-effort: a disabled or full backend is not surfaced to callers.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Store backed by the tab's `sessionStorage`. Browser builds only.
#[cfg(feature = "hydrate")]
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl CredentialStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// The tab's `sessionStorage`, or `None` where it is unreachable (server
/// rendering, or a browser with storage disabled).
pub fn browser_store() -> Option<Rc<dyn CredentialStore>> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        Some(Rc::new(BrowserSessionStore { storage }) as Rc<dyn CredentialStore>)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// In-memory store standing in for `sessionStorage` in unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
