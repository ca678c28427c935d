//! Session and staged-post persistence
//!
//! [`SessionStore`] mirrors the signed-in identity to localStorage so it
//! survives reloads; [`PostStaging`] holds the one transient "post being
//! edited" copy in sessionStorage between the edit-fetch and the edit-form
//! submit. Both are generic over [`KeyValue`] so tests can inject an
//! in-memory store.

use shared::Post;

use super::storage::{
    BrowserStore, KeyValue, AUTH_TOKEN_KEY, STAGED_POST_KEY, USERNAME_KEY,
};

/// The current signed-in identity, if any.
///
/// Both fields are populated together on sign-in and cleared together on
/// logout; a half-populated pair in storage is treated as signed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
}

impl Session {
    pub fn signed_in(token: String, username: String) -> Self {
        Self {
            token: Some(token),
            username: Some(username),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Load/save/clear for the persisted session
pub struct SessionStore<S> {
    store: S,
}

impl SessionStore<BrowserStore> {
    /// Store backed by `localStorage`; `None` when storage is unavailable
    pub fn browser() -> Option<Self> {
        BrowserStore::local().map(Self::new)
    }
}

impl<S: KeyValue> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted session. Absent values mean "signed out";
    /// there is no error path.
    pub fn load(&self) -> Session {
        let token = self.store.get(AUTH_TOKEN_KEY);
        let username = self.store.get(USERNAME_KEY);
        match (token, username) {
            (Some(token), Some(username)) => Session::signed_in(token, username),
            _ => Session::default(),
        }
    }

    pub fn save(&self, token: &str, username: &str) {
        self.store.set(AUTH_TOKEN_KEY, token);
        self.store.set(USERNAME_KEY, username);
    }

    pub fn clear(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(USERNAME_KEY);
    }
}

/// The transient staging slot for the post being edited
pub struct PostStaging<S> {
    store: S,
}

impl PostStaging<BrowserStore> {
    /// Staging backed by `sessionStorage`; `None` when storage is unavailable
    pub fn browser() -> Option<Self> {
        BrowserStore::session().map(Self::new)
    }
}

impl<S: KeyValue> PostStaging<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn stage(&self, post: &Post) {
        match serde_json::to_string(post) {
            Ok(json) => self.store.set(STAGED_POST_KEY, &json),
            Err(err) => log::error!("failed to serialize staged post: {err}"),
        }
    }

    /// Read the staged post. An unreadable payload is discarded and treated
    /// as absent.
    pub fn load(&self) -> Option<Post> {
        let raw = self.store.get(STAGED_POST_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(post) => Some(post),
            Err(err) => {
                log::warn!("discarding unreadable staged post: {err}");
                self.store.remove(STAGED_POST_KEY);
                None
            }
        }
    }

    pub fn clear(&self) {
        self.store.remove(STAGED_POST_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;

    #[test]
    fn test_session_load_empty() {
        let store = SessionStore::new(MemoryStore::default());
        let session = store.load();
        assert!(!session.is_authenticated());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_session_save_then_load() {
        let store = SessionStore::new(MemoryStore::default());
        store.save("tok-1", "alice");

        let session = store.load();
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_session_clear() {
        let store = SessionStore::new(MemoryStore::default());
        store.save("tok-1", "alice");
        store.clear();
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_half_populated_session_is_signed_out() {
        let backing = MemoryStore::default();
        backing.set(AUTH_TOKEN_KEY, "tok-1");
        let store = SessionStore::new(backing);
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_staging_round_trip() {
        let staging = PostStaging::new(MemoryStore::default());
        assert_eq!(staging.load(), None);

        let post = Post {
            id: "42".to_string(),
            title: "Title".to_string(),
            content: "Body".to_string(),
        };
        staging.stage(&post);
        assert_eq!(staging.load(), Some(post));

        staging.clear();
        assert_eq!(staging.load(), None);
    }

    #[test]
    fn test_staging_discards_corrupt_payload() {
        let backing = MemoryStore::default();
        backing.set(STAGED_POST_KEY, "not json");
        let staging = PostStaging::new(backing);

        assert_eq!(staging.load(), None);
        // The corrupt entry is removed, not left to fail again
        assert_eq!(staging.load(), None);
    }
}
