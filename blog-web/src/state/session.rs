//! Session state management

use leptos::prelude::*;

use crate::services::session::{Session, SessionStore};

/// Global session context.
///
/// Holds the one reactive [`Session`] for the page; sign-in and sign-out
/// write through to persistent storage so the identity survives reloads.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    /// Start from whatever the last page load persisted
    pub fn restore() -> Self {
        let restored = SessionStore::browser()
            .map(|store| store.load())
            .unwrap_or_default();
        Self {
            session: RwSignal::new(restored),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username.clone())
    }

    pub fn sign_in(&self, token: String, username: String) {
        if let Some(store) = SessionStore::browser() {
            store.save(&token, &username);
        }
        self.session.set(Session::signed_in(token, username));
    }

    pub fn sign_out(&self) {
        if let Some(store) = SessionStore::browser() {
            store.clear();
        }
        self.session.set(Session::default());
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::restore();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
