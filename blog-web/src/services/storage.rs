//! Typed key-value storage over the browser storage areas
//!
//! Every persisted value lives under a named, versioned key so that unrelated
//! entries cannot collide and a future layout change can bump the version.
//! The [`KeyValue`] trait keeps the stores injectable; tests run against
//! [`MemoryStore`] instead of a browser.

use std::cell::RefCell;
use std::collections::HashMap;

/// Persisted auth token (localStorage, survives reloads)
pub const AUTH_TOKEN_KEY: &str = "blog.auth-token.v1";
/// Persisted username (localStorage, survives reloads)
pub const USERNAME_KEY: &str = "blog.username.v1";
/// Staged post being edited (sessionStorage, survives only the browsing session)
pub const STAGED_POST_KEY: &str = "blog.staged-post.v1";

/// Minimal string key-value store interface
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// A browser storage area (`localStorage` or `sessionStorage`).
///
/// Construction returns `None` when the area is unavailable (no window, or
/// storage disabled by the browser); callers treat that as "nothing stored".
pub struct BrowserStore {
    area: web_sys::Storage,
}

impl BrowserStore {
    /// The page-reload-surviving `localStorage` area
    pub fn local() -> Option<Self> {
        let window = web_sys::window()?;
        let area = window.local_storage().ok().flatten()?;
        Some(Self { area })
    }

    /// The browsing-session-scoped `sessionStorage` area
    pub fn session() -> Option<Self> {
        let window = web_sys::window()?;
        let area = window.session_storage().ok().flatten()?;
        Some(Self { area })
    }
}

impl KeyValue for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.area.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        // Quota or privacy-mode failures are logged, never fatal
        if self.area.set_item(key, value).is_err() {
            log::warn!("storage write failed for key {key}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = self.area.remove_item(key);
    }
}

/// In-memory store used by unit tests in place of a browser storage area
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);

        store.set(AUTH_TOKEN_KEY, "tok");
        assert_eq!(store.get(AUTH_TOKEN_KEY), Some("tok".to_string()));

        store.remove(AUTH_TOKEN_KEY);
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    }
}
