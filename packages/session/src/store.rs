use std::sync::Arc;

use crate::user::{Session, User};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized user document.
pub const USER_KEY: &str = "user";

/// Failures of the underlying key/value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage backend in this environment (e.g. localStorage disabled).
    #[error("session storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (e.g. quota exceeded).
    #[error("session storage operation failed: {0}")]
    Backend(String),
}

/// Durable client-side key/value store holding the session.
///
/// Injected into [`SessionManager`] and the HTTP client factory instead of
/// being reached as an ambient global, so tests run against [`MemoryStore`]
/// and the web build against localStorage.
///
/// [`MemoryStore`]: crate::MemoryStore
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Single source of truth for reading, writing, and discarding the client's
/// authentication state.
///
/// Every failure path inside this type degrades to "no session" (`None` or
/// `false`) and is logged; nothing here surfaces an error to the UI layer.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl PartialEq for SessionManager {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The validated session, or `None` when either key is absent, the user
    /// document does not parse, or email/role are empty.
    pub fn session(&self) -> Option<Session> {
        let token = self.read(TOKEN_KEY)?;
        let user_json = self.read(USER_KEY)?;
        Session::parse(&token, &user_json)
    }

    /// The persisted user, subject to the same validation as [`session`].
    ///
    /// [`session`]: Self::session
    pub fn current_user(&self) -> Option<User> {
        self.session().map(|s| s.user)
    }

    /// Raw token accessor; `None` when absent or the store is unreachable.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// Persist a signed-in user and their token.
    ///
    /// Returns `false` without touching prior state when the token is empty or
    /// the user fails validation. The two keys are written independently
    /// (token first); readers treat a torn state as "no session", so the race
    /// window between the writes is benign.
    pub fn save_user_data(&self, user: &User, token: &str) -> bool {
        if token.is_empty() || !user.is_valid() {
            return false;
        }
        let user_json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("failed to serialize user: {e}");
                return false;
            }
        };
        if let Err(e) = self.store.set(TOKEN_KEY, token) {
            tracing::error!("failed to persist token: {e}");
            return false;
        }
        if let Err(e) = self.store.set(USER_KEY, &user_json) {
            tracing::error!("failed to persist user: {e}");
            return false;
        }
        true
    }

    /// Remove both session keys. Idempotent; `false` only when the store
    /// itself errors.
    pub fn clear_user_data(&self) -> bool {
        let mut ok = true;
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::error!("failed to remove {key}: {e}");
                ok = false;
            }
        }
        ok
    }

    /// Whether the current user's role is one of `required`.
    ///
    /// Raw, case-sensitive comparison: `"hr"` does not match `"HR"`. The
    /// redirect rules classify case-insensitively through [`Role::parse`]
    /// instead; the split is inherited behavior, kept until the role policy is
    /// unified (see DESIGN.md).
    ///
    /// [`Role::parse`]: crate::Role::parse
    pub fn has_user_role<S: AsRef<str>>(&self, required: &[S]) -> bool {
        let Some(user) = self.current_user() else {
            return false;
        };
        required.iter().any(|role| role.as_ref() == user.role)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("session store read failed for {key}: {e}");
                None
            }
        }
    }
}
