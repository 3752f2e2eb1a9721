// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Authenticated session context.
//!
//! The session is an explicit object: hydrated once from storage at
//! startup, then handed to the API client and the dashboard guard. The
//! persisted layout matches what the web panel keeps in `localStorage`:
//! the raw token under [`TOKEN_KEY`], and `{"state": {...}, "version": 0}`
//! under [`SESSION_KEY`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::auth::storage::{KeyValueStore, StorageError};
use crate::models::user::User;

/// Key holding the bare bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Key holding the persisted session blob.
pub const SESSION_KEY: &str = "dignemi-auth-storage";

const STORAGE_VERSION: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl SessionState {
    /// Authenticated only with both a token and a user.
    fn normalized(mut self) -> Self {
        if self.token.is_none() || self.user.is_none() {
            self.is_authenticated = false;
        }
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Persisted {
    state: SessionState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Restore the session from storage. An unreadable blob yields a
    /// signed-out session rather than an error.
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let state = match storage.get(SESSION_KEY)? {
            Some(raw) => match serde_json::from_str::<Persisted>(&raw) {
                Ok(persisted) => persisted.state.normalized(),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable session blob");
                    SessionState::default()
                }
            },
            None => SessionState::default(),
        };

        tracing::debug!(authenticated = state.is_authenticated, "Session hydrated");
        Ok(Self {
            storage,
            state: RwLock::new(state),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated
    }

    /// Persist `token` and `user` and mark the session authenticated.
    pub fn login(&self, token: &str, user: User) -> Result<(), StorageError> {
        let state = SessionState {
            token: Some(token.to_string()),
            user: Some(user),
            is_authenticated: true,
        };
        let blob = serde_json::to_string(&Persisted {
            state: state.clone(),
            version: STORAGE_VERSION,
        })?;

        // Blob first: a stored token without a session must never be left behind
        self.storage.set(SESSION_KEY, &blob)?;
        if let Err(e) = self.storage.set(TOKEN_KEY, token) {
            if let Err(cleanup) = self.storage.remove(SESSION_KEY) {
                tracing::error!(error = %cleanup, "Failed to roll back session blob");
            }
            return Err(e);
        }
        *self.write() = state;

        tracing::info!("Session established");
        Ok(())
    }

    /// Clear both storage keys and the in-memory state. Both removals are
    /// attempted; the first failure is returned.
    pub fn logout(&self) -> Result<(), StorageError> {
        *self.write() = SessionState::default();
        let token = self.storage.remove(TOKEN_KEY);
        let blob = self.storage.remove(SESSION_KEY);
        token.and(blob)
    }

    /// Same as [`logout`](Self::logout), for a session rejected by the API.
    pub fn expire(&self) -> Result<(), StorageError> {
        tracing::warn!("Session expired or invalid, clearing stored credentials");
        self.logout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::storage::MemoryStore;
    use crate::models::user::Role;

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "ana@dignemi.org".into(),
            role: Role::Editor,
            name: None,
        }
    }

    #[test]
    fn login_persists_both_keys() {
        let storage = Arc::new(MemoryStore::new());
        let session = SessionStore::hydrate(storage.clone()).unwrap();
        assert!(!session.is_authenticated());

        session.login("tok", user()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("tok"));

        let blob: serde_json::Value =
            serde_json::from_str(&storage.get(SESSION_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(blob["version"], 0);
        assert_eq!(blob["state"]["isAuthenticated"], true);
        assert_eq!(blob["state"]["user"]["role"], "EDITOR");

        let restored = SessionStore::hydrate(storage).unwrap();
        assert_eq!(restored.user(), Some(user()));
        assert_eq!(restored.token().as_deref(), Some("tok"));
    }

    #[test]
    fn logout_clears_storage() {
        let storage = Arc::new(MemoryStore::new());
        let session = SessionStore::hydrate(storage.clone()).unwrap();
        session.login("tok", user()).unwrap();
        session.expire().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert!(storage.is_empty());
    }

    /// Memory storage that refuses writes and removals of one key.
    #[derive(Debug)]
    struct FailingKey {
        inner: MemoryStore,
        key: &'static str,
    }

    impl KeyValueStore for FailingKey {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Poisoned);
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Poisoned);
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_token_write_leaves_nothing_stored() {
        let storage = Arc::new(FailingKey {
            inner: MemoryStore::new(),
            key: TOKEN_KEY,
        });
        let session = SessionStore::hydrate(storage.clone()).unwrap();

        assert!(session.login("tok", user()).is_err());
        assert!(!session.is_authenticated());
        assert!(storage.inner.is_empty());
    }

    #[test]
    fn logout_removes_blob_even_if_token_removal_fails() {
        let storage = Arc::new(FailingKey {
            inner: MemoryStore::new(),
            key: TOKEN_KEY,
        });
        storage.inner.set(TOKEN_KEY, "tok").unwrap();
        storage.inner.set(SESSION_KEY, "{}").unwrap();
        let session = SessionStore::hydrate(storage.clone()).unwrap();

        assert!(matches!(session.logout(), Err(StorageError::Poisoned)));
        assert_eq!(storage.inner.get(SESSION_KEY).unwrap(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn inconsistent_blob_is_not_authenticated() {
        let storage = Arc::new(MemoryStore::new());
        storage
            .set(
                SESSION_KEY,
                r#"{"state":{"token":null,"user":null,"isAuthenticated":true},"version":0}"#,
            )
            .unwrap();
        let session = SessionStore::hydrate(storage.clone()).unwrap();
        assert!(!session.is_authenticated());

        storage.set(SESSION_KEY, "not json").unwrap();
        let session = SessionStore::hydrate(storage).unwrap();
        assert_eq!(session.snapshot(), SessionState::default());
    }
}
