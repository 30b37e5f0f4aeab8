//! In-memory session state shared by the gate and the login flow.

use std::collections::HashMap;
use tokio::sync::RwLock;

pub mod resolve;
pub mod token;

pub use self::resolve::{resolve_session, ResolvedSession};
pub use self::token::{TokenError, TokenGenerator};

/// Authorization state for one issued token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub authenticated: bool,
}

impl Session {
    /// A fresh session always starts unauthenticated.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token,
            authenticated: false,
        }
    }
}

/// Token to session mapping.
///
/// Readers share the lock, `put` takes it exclusively. Callers that read a
/// session, change it and `put` it back are not atomic as a whole: two
/// concurrent writers on the same token race and the last `put` wins.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the session stored under `token`, if any.
    pub async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Insert or replace the session stored under `token`.
    pub async fn put(&self, token: String, session: Session) {
        self.sessions.write().await.insert(token, session);
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
